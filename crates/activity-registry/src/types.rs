//! Activity records and roster confirmations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Activities keyed by their human-readable name.
pub type ActivityMap = BTreeMap<String, Activity>;

/// A named extracurricular offering with a capacity and a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description
    pub description: String,

    /// Free-text schedule (e.g. "Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,

    /// Upper bound on roster size
    pub max_participants: u32,

    /// Participant emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style initial roster, used for seeding.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether an email is on the roster. Comparison is case-sensitive.
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Whether another participant fits. Derived from the current roster length.
    pub fn has_capacity(&self) -> bool {
        self.participants.len() < self.max_participants as usize
    }

    /// Number of open places left.
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

/// Which roster transition a confirmation describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    SignedUp,
    Removed,
}

/// Confirmation returned by a successful signup or removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterChange {
    pub action: RosterAction,
    pub activity: String,
    pub email: String,
}

impl RosterChange {
    pub(crate) fn signed_up(activity: &str, email: &str) -> Self {
        Self {
            action: RosterAction::SignedUp,
            activity: activity.to_string(),
            email: email.to_string(),
        }
    }

    pub(crate) fn removed(activity: &str, email: &str) -> Self {
        Self {
            action: RosterAction::Removed,
            activity: activity.to_string(),
            email: email.to_string(),
        }
    }
}

impl fmt::Display for RosterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            RosterAction::SignedUp => write!(f, "Signed up {} for {}", self.email, self.activity),
            RosterAction::Removed => write!(f, "Removed {} from {}", self.email, self.activity),
        }
    }
}
