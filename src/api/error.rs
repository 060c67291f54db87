use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::Error;

/// Error returned by handlers, rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            e if e.is_conflict() => StatusCode::BAD_REQUEST,
            Error::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "detail": self.message,
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_statuses() {
        let cases = [
            (Error::ActivityNotFound("x".into()), StatusCode::NOT_FOUND),
            (
                Error::AlreadySignedUp {
                    activity: "x".into(),
                    email: "a@b".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::NotRegistered {
                    activity: "x".into(),
                    email: "a@b".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::invalid_request("missing"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status, expected);
        }
    }

    #[test]
    fn not_found_message_is_fixed() {
        let err = ApiError::from(Error::ActivityNotFound("Fake Club".into()));
        assert_eq!(err.message, "Activity not found");
    }
}
