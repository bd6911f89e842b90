//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use exam_core::model::{GradeReportError, QuestionError};
use exam_core::run::QuizRunError;

/// Errors surfaced by the REST boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The server answered with an error body carrying a message.
    #[error("server error ({status}): {message}")]
    Server { status: StatusCode, message: String },

    /// Non-success status without a readable message body.
    #[error("request failed with status {0}")]
    Status(StatusCode),

    /// Missing or rejected credentials.
    #[error("authentication required")]
    Unauthorized,

    /// The response body could not be decoded.
    #[error("malformed response payload: {0}")]
    Parse(String),

    /// A decoded question violated the domain invariants.
    #[error(transparent)]
    Question(#[from] QuestionError),

    /// A decoded grade report violated the domain invariants.
    #[error(transparent)]
    Report(#[from] GradeReportError),

    /// Transport-level failure (DNS, connect, timeout, ...).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// User-facing one-liner, preferring the server's own message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Unauthorized => "Please log in and try again.".to_string(),
            ApiError::Http(_) => "Network error. Check your connection and retry.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Run(#[from] QuizRunError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
