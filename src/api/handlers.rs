//! API handlers

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::api::{ApiError, AppState};
use crate::types::Activity;
use crate::{Error, Result};

/// Health check with store status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        activities: state.store.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub activities: usize,
}

/// List every activity keyed by name
pub async fn list_activities(State(state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    Json(state.store.list())
}

/// Query string shared by the roster endpoints.
///
/// Parsed from raw pairs so a repeated `email` resolves to its last value.
#[derive(Debug, Default)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            email: pairs
                .into_iter()
                .filter(|(key, _)| key == "email")
                .map(|(_, value)| value)
                .last(),
        }
    }

    fn email(&self) -> Result<&str> {
        match self.email.as_deref() {
            Some(email) if !email.trim().is_empty() => Ok(email),
            _ => Err(Error::invalid_request("email query parameter is required")),
        }
    }
}

type ActivityPath = std::result::Result<Path<String>, PathRejection>;
type PairsQuery = std::result::Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Resolve the activity name and the query string of a roster request.
fn roster_request(path: ActivityPath, query: PairsQuery) -> Result<(String, ParticipantQuery)> {
    let Path(activity_name) =
        path.map_err(|rejection| Error::invalid_request(rejection.body_text()))?;
    let Query(pairs) =
        query.map_err(|rejection| Error::invalid_request(rejection.body_text()))?;
    Ok((activity_name, ParticipantQuery::from_pairs(pairs)))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Sign a student up for an activity
pub async fn signup(
    State(state): State<AppState>,
    path: ActivityPath,
    query: PairsQuery,
) -> std::result::Result<Json<MessageResponse>, ApiError> {
    let (activity_name, params) = roster_request(path, query)?;
    let email = params.email()?;

    if let Err(err) = state.store.add_participant(&activity_name, email) {
        tracing::debug!(activity = %activity_name, %email, error = %err, "Signup rejected");
        return Err(err.into());
    }

    tracing::info!(activity = %activity_name, %email, "Participant signed up");

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

/// Remove a student from an activity
pub async fn unregister(
    State(state): State<AppState>,
    path: ActivityPath,
    query: PairsQuery,
) -> std::result::Result<Json<MessageResponse>, ApiError> {
    let (activity_name, params) = roster_request(path, query)?;
    let email = params.email()?;

    if let Err(err) = state.store.remove_participant(&activity_name, email) {
        tracing::debug!(activity = %activity_name, %email, error = %err, "Unregister rejected");
        return Err(err.into());
    }

    tracing::info!(activity = %activity_name, %email, "Participant unregistered");

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn last_email_wins() {
        let query = ParticipantQuery::from_pairs(pairs(&[
            ("email", "a@x.edu"),
            ("other", "1"),
            ("email", "b@x.edu"),
        ]));
        assert_eq!(query.email(), Ok("b@x.edu"));
    }

    #[test]
    fn missing_email_is_invalid() {
        let query = ParticipantQuery::from_pairs(pairs(&[("mail", "a@x.edu")]));
        assert_eq!(
            query.email(),
            Err(Error::invalid_request("email query parameter is required"))
        );
    }
}
