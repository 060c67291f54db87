//! Error types for the activities service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("{email} is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{email} is not registered")]
    NotRegistered { activity: String, email: String },

    #[error("{activity} is full")]
    ActivityFull { activity: String, capacity: u32 },

    #[error("{0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }

    /// True for errors caused by the roster state rather than the request shape.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Error::AlreadySignedUp { .. } | Error::NotRegistered { .. } | Error::ActivityFull { .. }
        )
    }
}
