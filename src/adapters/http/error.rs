//! JSON error bodies and status mapping shared by all routers.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::decision::DecisionError;
use crate::domain::foundation::ErrorCode;
use crate::domain::user::UserError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::UserNotFound | ErrorCode::DecisionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
        ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 401 with the `WWW-Authenticate: Bearer` challenge.
pub fn unauthorized_response(body: ErrorResponse) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(body),
    )
        .into_response()
}

fn internal_response(detail: String, verbose: bool) -> Response {
    tracing::error!(error = %detail, "Request failed");
    let message = if verbose {
        detail
    } else {
        "Internal server error".to_string()
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal(message)),
    )
        .into_response()
}

pub fn decision_error_response(error: DecisionError, verbose: bool) -> Response {
    match error {
        DecisionError::Infrastructure(msg) => internal_response(msg, verbose),
        DecisionError::ValidationFailed { ref field, .. } => {
            let body = ErrorResponse::new(error.code(), error.message())
                .with_details(serde_json::json!({ "field": field }));
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
        other => (
            status_for(other.code()),
            Json(ErrorResponse::new(other.code(), other.message())),
        )
            .into_response(),
    }
}

pub fn user_error_response(error: UserError, verbose: bool) -> Response {
    match error {
        UserError::Infrastructure(msg) => internal_response(msg, verbose),
        UserError::InvalidCredentials | UserError::Inactive => {
            unauthorized_response(ErrorResponse::new(error.code(), error.message()))
        }
        UserError::NotFound => unauthorized_response(ErrorResponse::unauthorized(
            "Could not validate credentials",
        )),
        UserError::ValidationFailed { ref field, .. } => {
            let body = ErrorResponse::new(error.code(), error.message())
                .with_details(serde_json::json!({ "field": field }));
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
        UserError::EmailTaken => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(error.code(), error.message())),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DecisionId;

    #[test]
    fn decision_errors_map_to_statuses() {
        let cases = [
            (DecisionError::not_found(DecisionId::new()), StatusCode::NOT_FOUND),
            (DecisionError::invalid_state("archived"), StatusCode::CONFLICT),
            (
                DecisionError::validation("num_scenarios", "out of range"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DecisionError::infrastructure("db down"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(decision_error_response(error, false).status(), status);
        }
    }

    #[test]
    fn bad_credentials_carry_bearer_challenge() {
        let response = user_error_response(UserError::InvalidCredentials, false);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn email_taken_is_bad_request() {
        let response = user_error_response(UserError::EmailTaken, false);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_response_serializes_code_string() {
        let body = ErrorResponse::new(ErrorCode::DecisionNotFound, "Decision not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "DECISION_NOT_FOUND");
        assert!(json.get("details").is_none());
    }
}
