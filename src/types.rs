//! Core types for the activities service

use serde::Serialize;

/// Participant identifier. Students are known only by email.
pub type Email = String;

/// A single extracurricular activity.
///
/// The activity name is the key it is stored under and is not repeated here.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<Email>,
}

impl Activity {
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

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Email>,
    {
        for email in participants {
            let email = email.into();
            if !self.has_participant(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}
