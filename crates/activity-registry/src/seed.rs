//! Seed data for the registry.
//!
//! The seed file format is the same JSON shape the list endpoint returns:
//!
//! ```json
//! {
//!   "Chess Club": {
//!     "description": "Learn strategies and compete in chess tournaments",
//!     "schedule": "Fridays, 3:30 PM - 5:00 PM",
//!     "max_participants": 12,
//!     "participants": ["michael@mergington.edu"]
//!   }
//! }
//! ```

use crate::error::{RegistryError, RegistryResult};
use crate::registry::ActivityRegistry;
use crate::types::{Activity, ActivityMap};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::info;

/// The built-in Mergington High School catalogue.
pub fn default_activities() -> ActivityMap {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball",
            Activity::new(
                "Team practice and inter-school basketball games",
                "Wednesdays, 4:00 PM - 6:00 PM",
                15,
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Tennis drills, singles and doubles matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                10,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and mixed media",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Acting workshops and the spring school play",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["mia@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Problem solving and preparation for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["amelia@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Seed file entries in file order, repeated names included.
struct SeedEntries(Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for SeedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SeedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from activity name to activity")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Activity>()? {
                    entries.push(entry);
                }
                Ok(SeedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Read a seed set from a JSON file.
///
/// An activity name that appears more than once is rejected rather than
/// letting the later entry overwrite the earlier one.
pub fn load_seed_file(path: impl AsRef<Path>) -> RegistryResult<ActivityMap> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let SeedEntries(entries) = serde_json::from_str(&raw)?;

    let mut seed = ActivityMap::new();
    for (name, activity) in entries {
        if seed.contains_key(&name) {
            return Err(RegistryError::InvalidSeed {
                activity: name,
                reason: "activity name appears more than once".into(),
            });
        }
        seed.insert(name, activity);
    }

    info!(path = %path.display(), activities = seed.len(), "Loaded seed file");
    Ok(seed)
}

/// Build a registry from an optional seed file, falling back to the built-in catalogue.
pub fn registry_from_optional_file(path: Option<&Path>) -> RegistryResult<ActivityRegistry> {
    match path {
        Some(path) => ActivityRegistry::from_seed(load_seed_file(path)?),
        None => Ok(ActivityRegistry::with_default_activities()),
    }
}
