//! Activity Signup Server - HTTP front end for the activity registry.
//!
//! Exposes the activity list and lets callers:
//! - Sign a participant up for an activity
//! - Remove a participant from an activity

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::ApiError;
