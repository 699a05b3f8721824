//! Unified error handling for the funnel.
//!
//! Every failure class from the funnel maps onto one `AppError` variant.
//! All route handlers return `Result<T, AppError>`; nothing propagates as
//! an unhandled fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

/// Application-level error type for the funnel.
#[derive(Debug, Error)]
pub enum AppError {
    /// A form field is missing or invalid. Blocks the transition, no
    /// destructive effect.
    #[error("Invalid input: {0}")]
    InputValidation(String),

    /// A browser capability (camera, file API) is absent or was denied.
    /// Always recoverable by the upload fallback.
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// A required prior record is absent. Resolved by redirecting to the
    /// step that produces it.
    #[error("Missing prerequisite, redirecting to {redirect}")]
    PreconditionMissing { redirect: String },

    /// Session read/write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Anything else, surfaced as a generic dismissible notice.
    #[error("Internal error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Convenience constructor for precondition redirects.
    #[must_use]
    pub fn redirect_to(target: &str) -> Self {
        Self::PreconditionMissing {
            redirect: target.to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Session(_) | Self::Unknown(_)) {
            tracing::error!(error = %self, "Request error");
        }

        match self {
            Self::InputValidation(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
            Self::CapabilityUnavailable(message) => {
                (StatusCode::SERVICE_UNAVAILABLE, message).into_response()
            }
            Self::PreconditionMissing { redirect } => Redirect::to(&redirect).into_response(),
            // Don't expose internal error details to clients
            Self::Session(_) | Self::Unknown(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong".to_owned(),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(AppError::InputValidation("bad".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::CapabilityUnavailable("no camera".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(AppError::Unknown("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_precondition_redirects() {
        let response = AppError::redirect_to("/questionnaire").into_response();
        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get("location").map(|v| v.to_str().ok()),
            Some(Some("/questionnaire"))
        );
    }

    #[test]
    fn test_internal_errors_are_not_exposed() {
        let err = AppError::Unknown("secret detail".into());
        let display = err.to_string();
        assert!(display.contains("secret detail"));
        // The response body is generic; only logs carry the detail.
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
