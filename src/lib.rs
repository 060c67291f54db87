//! Mergington Activities - extracurricular signup service
//!
//! Lists the school's activities and lets students sign up for or leave them
//! by email. State lives in memory for the lifetime of the process.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
