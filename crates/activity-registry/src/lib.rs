//! In-memory registry of extracurricular activities.
//!
//! Each activity has a fixed capacity and an ordered roster of participant
//! emails. The registry enforces signup and removal rules; rosters never
//! exceed capacity and never contain duplicates. No external persistence.

mod error;
mod registry;
pub mod seed;
mod types;

pub use error::{RegistryError, RegistryResult};
pub use registry::ActivityRegistry;
pub use types::*;
