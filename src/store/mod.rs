//! Activity store
//!
//! In-memory mapping from activity name to [`Activity`]. The set of activities
//! is fixed when the store is built; only participant rosters change afterwards.
//! Every check-then-mutate sequence runs while holding the entry's shard lock,
//! so concurrent signups for the same email cannot both succeed.

use dashmap::DashMap;
use std::collections::BTreeMap;

use crate::types::Activity;
use crate::{Error, Result};

mod seed;

pub use seed::seed_activities;

/// Roster rules applied on signup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorePolicy {
    /// Reject signups once `max_participants` is reached.
    pub enforce_capacity: bool,
}

pub struct ActivityStore {
    activities: DashMap<String, Activity>,
    policy: StorePolicy,
}

impl ActivityStore {
    /// Build a store holding the school's standard activity set.
    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    pub fn from_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            activities: activities.into_iter().collect(),
            policy: StorePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StorePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of every activity, ordered by name.
    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Result<Activity> {
        self.activities
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::ActivityNotFound(name.to_string()))
    }

    /// Append `email` to the roster of `name`.
    pub fn add_participant(&self, name: &str, email: &str) -> Result<()> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| Error::ActivityNotFound(name.to_string()))?;

        if activity.has_participant(email) {
            return Err(Error::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if self.policy.enforce_capacity && activity.is_full() {
            return Err(Error::ActivityFull {
                activity: name.to_string(),
                capacity: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster of `name`, keeping the order of the rest.
    pub fn remove_participant(&self, name: &str, email: &str) -> Result<()> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| Error::ActivityNotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| Error::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_store() -> ActivityStore {
        ActivityStore::from_activities([
            (
                "Chess Club".to_string(),
                Activity::new("Chess", "Fridays", 2).with_participants(["a@x.edu"]),
            ),
            ("Drama Club".to_string(), Activity::new("Drama", "Mondays", 5)),
        ])
    }

    #[test]
    fn seeded_store_contains_chess_club() {
        let store = ActivityStore::seeded();
        let chess = store.get("Chess Club").unwrap();
        assert_eq!(
            chess.description,
            "Learn strategies and compete in chess tournaments"
        );
        assert!(!chess.participants.is_empty());
        assert!(store.len() >= 4);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = small_store();
        assert!(store.get("Chess Club").is_ok());
        assert_eq!(
            store.get("chess club"),
            Err(Error::ActivityNotFound("chess club".to_string()))
        );
    }

    #[test]
    fn list_is_sorted_by_name() {
        let names: Vec<_> = ActivityStore::seeded().list().into_keys().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn add_appends_in_order() {
        let store = small_store();
        store.add_participant("Drama Club", "b@x.edu").unwrap();
        store.add_participant("Drama Club", "c@x.edu").unwrap();
        assert_eq!(
            store.get("Drama Club").unwrap().participants,
            vec!["b@x.edu", "c@x.edu"]
        );
    }

    #[test]
    fn duplicate_signup_is_rejected() {
        let store = small_store();
        let err = store.add_participant("Chess Club", "a@x.edu").unwrap_err();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("already signed up"));
        assert_eq!(store.get("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn unknown_activity_is_not_found() {
        let store = small_store();
        assert_eq!(
            store.add_participant("Fake Club", "a@x.edu"),
            Err(Error::ActivityNotFound("Fake Club".to_string()))
        );
        assert_eq!(
            store.remove_participant("Fake Club", "a@x.edu"),
            Err(Error::ActivityNotFound("Fake Club".to_string()))
        );
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let store = small_store();
        for email in ["b@x.edu", "c@x.edu", "d@x.edu"] {
            store.add_participant("Drama Club", email).unwrap();
        }
        store.remove_participant("Drama Club", "c@x.edu").unwrap();
        assert_eq!(
            store.get("Drama Club").unwrap().participants,
            vec!["b@x.edu", "d@x.edu"]
        );
    }

    #[test]
    fn remove_of_non_member_is_rejected() {
        let store = small_store();
        let err = store
            .remove_participant("Chess Club", "nobody@x.edu")
            .unwrap_err();
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn capacity_is_not_enforced_by_default() {
        let store = small_store();
        store.add_participant("Chess Club", "b@x.edu").unwrap();
        store.add_participant("Chess Club", "c@x.edu").unwrap();
        assert_eq!(store.get("Chess Club").unwrap().participants.len(), 3);
    }

    #[test]
    fn capacity_enforced_when_configured() {
        let store = small_store().with_policy(StorePolicy {
            enforce_capacity: true,
        });
        store.add_participant("Chess Club", "b@x.edu").unwrap();
        let err = store.add_participant("Chess Club", "c@x.edu").unwrap_err();
        assert_eq!(
            err,
            Error::ActivityFull {
                activity: "Chess Club".to_string(),
                capacity: 2,
            }
        );
        assert_eq!(err.to_string(), "Chess Club is full");
    }
}
