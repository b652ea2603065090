use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failure categories surfaced by the workflows.
///
/// `Authentication` deliberately covers both "unknown email" and "wrong
/// password"; the true cause is only ever logged, never returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Encoding(String),

    #[error("user is in blacklist")]
    Blacklisted,

    #[error("invalid email or password")]
    Authentication,

    #[error("not found")]
    NotFound,

    #[error("blacklist service error: {0}")]
    Transport(String),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
