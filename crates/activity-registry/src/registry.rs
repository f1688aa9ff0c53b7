//! In-memory activity registry.

use crate::error::{RegistryError, RegistryResult};
use crate::types::{Activity, ActivityMap, RosterChange};
use std::collections::HashSet;
use tracing::debug;

/// Activity registry.
///
/// The set of activity names is fixed at construction; only rosters change.
/// The registry does no locking of its own, so callers sharing it across
/// tasks must serialize mutation (the HTTP service wraps it in a `RwLock`).
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    /// Activities indexed by name
    activities: ActivityMap,
}

impl ActivityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            activities: ActivityMap::new(),
        }
    }

    /// Build a registry from a seed set, validating every activity.
    pub fn from_seed(seed: ActivityMap) -> RegistryResult<Self> {
        for (name, activity) in &seed {
            validate_seed_activity(name, activity)?;
        }
        debug!(activities = seed.len(), "Registry seeded");
        Ok(Self { activities: seed })
    }

    /// Registry seeded with the built-in catalogue.
    pub fn with_default_activities() -> Self {
        Self {
            activities: crate::seed::default_activities(),
        }
    }

    /// All activities and their current rosters.
    pub fn list_activities(&self) -> &ActivityMap {
        &self.activities
    }

    /// Get an activity by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Sign a participant up for an activity.
    ///
    /// Failures are reported in priority order: unknown activity, then an
    /// email already on the roster, then a full roster.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> RegistryResult<RosterChange> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::NotFound(activity_name.to_string()))?;

        if activity.is_registered(email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if !activity.has_capacity() {
            return Err(RegistryError::Full(activity_name.to_string()));
        }

        activity.participants.push(email.to_string());
        Ok(RosterChange::signed_up(activity_name, email))
    }

    /// Remove a participant from an activity, keeping the order of the rest.
    pub fn remove_participant(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> RegistryResult<RosterChange> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::NotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(RosterChange::removed(activity_name, email))
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Total roster entries across all activities.
    pub fn total_participants(&self) -> usize {
        self.activities.values().map(|a| a.participants.len()).sum()
    }
}

fn validate_seed_activity(name: &str, activity: &Activity) -> RegistryResult<()> {
    let invalid = |reason: String| RegistryError::InvalidSeed {
        activity: name.to_string(),
        reason,
    };

    if activity.max_participants == 0 {
        return Err(invalid("max_participants must be at least 1".into()));
    }

    if activity.participants.len() > activity.max_participants as usize {
        return Err(invalid(format!(
            "{} participants exceed capacity of {}",
            activity.participants.len(),
            activity.max_participants
        )));
    }

    let mut seen = HashSet::new();
    for email in &activity.participants {
        if !seen.insert(email.as_str()) {
            return Err(invalid(format!("duplicate participant {}", email)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RosterAction;

    fn registry_with(name: &str, activity: Activity) -> ActivityRegistry {
        let mut seed = ActivityMap::new();
        seed.insert(name.into(), activity);
        ActivityRegistry::from_seed(seed).unwrap()
    }

    fn assert_invariants(registry: &ActivityRegistry) {
        for (name, activity) in registry.list_activities() {
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{} over capacity",
                name
            );
            let unique: HashSet<_> = activity.participants.iter().collect();
            assert_eq!(unique.len(), activity.participants.len(), "{} has duplicates", name);
        }
    }

    #[test]
    fn test_signup_appends_in_order() {
        let mut registry = registry_with("Chess Club", Activity::new("Chess", "Fridays", 12));

        registry.signup("Chess Club", "a@mergington.edu").unwrap();
        registry.signup("Chess Club", "b@mergington.edu").unwrap();

        let chess = registry.get("Chess Club").unwrap();
        assert_eq!(chess.participants, vec!["a@mergington.edu", "b@mergington.edu"]);
    }

    #[test]
    fn test_signup_confirmation_message() {
        let mut registry = registry_with("Chess Club", Activity::new("Chess", "Fridays", 12));

        let change = registry.signup("Chess Club", "a@mergington.edu").unwrap();

        assert_eq!(change.action, RosterAction::SignedUp);
        assert_eq!(change.to_string(), "Signed up a@mergington.edu for Chess Club");
    }

    #[test]
    fn test_duplicate_signup_rejected() {
        let mut registry = registry_with("Chess Club", Activity::new("Chess", "Fridays", 12));

        registry.signup("Chess Club", "duplicate@mergington.edu").unwrap();
        let err = registry
            .signup("Chess Club", "duplicate@mergington.edu")
            .unwrap_err();

        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
        assert_eq!(err.to_string(), "Already signed up");
        assert_eq!(registry.get("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn test_email_is_case_sensitive() {
        let mut registry = registry_with("Chess Club", Activity::new("Chess", "Fridays", 12));

        registry.signup("Chess Club", "Student@mergington.edu").unwrap();
        registry.signup("Chess Club", "student@mergington.edu").unwrap();

        assert_eq!(registry.get("Chess Club").unwrap().participants.len(), 2);
    }

    #[test]
    fn test_signup_full_activity() {
        let tennis = Activity::new("Tennis", "Tuesdays", 1).with_participants(["a@mergington.edu"]);
        let mut registry = registry_with("Tennis Club", tennis);

        let err = registry.signup("Tennis Club", "b@mergington.edu").unwrap_err();

        assert!(matches!(err, RegistryError::Full(_)));
        assert_eq!(err.to_string(), "Activity is full");
        assert_eq!(
            registry.get("Tennis Club").unwrap().participants,
            vec!["a@mergington.edu"]
        );
    }

    #[test]
    fn test_already_registered_takes_priority_over_full() {
        let tennis = Activity::new("Tennis", "Tuesdays", 1).with_participants(["a@mergington.edu"]);
        let mut registry = registry_with("Tennis Club", tennis);

        let err = registry.signup("Tennis Club", "a@mergington.edu").unwrap_err();

        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
    }

    #[test]
    fn test_signup_unknown_activity() {
        let mut registry = ActivityRegistry::with_default_activities();
        let before = registry.list_activities().clone();

        let err = registry.signup("Nonexistent Club", "x@y.com").unwrap_err();

        assert!(matches!(err, RegistryError::NotFound(ref name) if name == "Nonexistent Club"));
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(registry.list_activities(), &before);
    }

    #[test]
    fn test_signup_then_remove_restores_roster() {
        let drama = Activity::new("Drama", "Mondays", 5)
            .with_participants(["a@mergington.edu", "b@mergington.edu"]);
        let mut registry = registry_with("Drama Club", drama);
        let before = registry.get("Drama Club").unwrap().participants.clone();

        registry.signup("Drama Club", "c@mergington.edu").unwrap();
        let change = registry
            .remove_participant("Drama Club", "c@mergington.edu")
            .unwrap();

        assert_eq!(change.to_string(), "Removed c@mergington.edu from Drama Club");
        assert_eq!(registry.get("Drama Club").unwrap().participants, before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let art = Activity::new("Art", "Thursdays", 5).with_participants([
            "a@mergington.edu",
            "b@mergington.edu",
            "c@mergington.edu",
        ]);
        let mut registry = registry_with("Art Club", art);

        registry.remove_participant("Art Club", "b@mergington.edu").unwrap();

        assert_eq!(
            registry.get("Art Club").unwrap().participants,
            vec!["a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn test_remove_unregistered_participant() {
        let mut registry = registry_with("Art Club", Activity::new("Art", "Thursdays", 5));

        let err = registry
            .remove_participant("Art Club", "ghost@mergington.edu")
            .unwrap_err();

        assert!(matches!(err, RegistryError::NotRegistered { .. }));
        assert_eq!(err.to_string(), "Participant not found in activity");
    }

    #[test]
    fn test_remove_unknown_activity() {
        let mut registry = ActivityRegistry::new();

        let err = registry
            .remove_participant("Nonexistent Club", "x@y.com")
            .unwrap_err();

        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_removal_frees_capacity() {
        let math = Activity::new("Math", "Tuesdays", 1).with_participants(["a@mergington.edu"]);
        let mut registry = registry_with("Math Club", math);

        assert!(registry.signup("Math Club", "b@mergington.edu").is_err());
        registry.remove_participant("Math Club", "a@mergington.edu").unwrap();
        registry.signup("Math Club", "b@mergington.edu").unwrap();

        assert_eq!(
            registry.get("Math Club").unwrap().participants,
            vec!["b@mergington.edu"]
        );
    }

    #[test]
    fn test_invariants_hold_under_mixed_operations() {
        let mut registry = registry_with("Debate Team", Activity::new("Debate", "Fridays", 3));
        let emails = ["a@x", "b@x", "a@x", "c@x", "d@x", "b@x", "e@x"];

        for (i, email) in emails.iter().enumerate() {
            let _ = registry.signup("Debate Team", email);
            if i % 3 == 2 {
                let _ = registry.remove_participant("Debate Team", email);
            }
            assert_invariants(&registry);
        }
    }

    #[test]
    fn test_from_seed_rejects_zero_capacity() {
        let mut seed = ActivityMap::new();
        seed.insert("Empty".into(), Activity::new("Nothing", "Never", 0));

        let err = ActivityRegistry::from_seed(seed).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSeed { .. }));
    }

    #[test]
    fn test_from_seed_rejects_overfull_roster() {
        let mut seed = ActivityMap::new();
        seed.insert(
            "Tiny".into(),
            Activity::new("Tiny", "Daily", 1).with_participants(["a@x", "b@x"]),
        );

        assert!(ActivityRegistry::from_seed(seed).is_err());
    }

    #[test]
    fn test_from_seed_rejects_duplicate_participants() {
        let mut seed = ActivityMap::new();
        seed.insert(
            "Twice".into(),
            Activity::new("Twice", "Daily", 5).with_participants(["a@x", "a@x"]),
        );

        let err = ActivityRegistry::from_seed(seed).unwrap_err();
        assert!(err.to_string().contains("duplicate participant a@x"));
    }

    #[test]
    fn test_counts() {
        let registry = ActivityRegistry::with_default_activities();
        let expected: usize = registry
            .list_activities()
            .values()
            .map(|a| a.participants.len())
            .sum();

        assert_eq!(registry.len(), 9);
        assert!(!registry.is_empty());
        assert_eq!(registry.total_participants(), expected);
    }
}
