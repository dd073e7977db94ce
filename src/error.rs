use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The reference backend's error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// An authentication error.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// An authorization error.
    #[error("Authorization failed")]
    Unauthorized,

    /// A resource not found error.
    #[error("Resource not found")]
    NotFound,

    /// A malformed request (bad path parameter, illegal state transition).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness conflict, reported to clients as a bad request.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A password hashing error.
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// An internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// A `Result` type that uses `AppError` as the error type.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        AppError::Validation(report.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Authentication(ref msg) => {
                tracing::warn!("Authentication failed: {}", msg);
                (StatusCode::UNAUTHORIZED, msg.clone())
            }

            AppError::Unauthorized => {
                tracing::warn!("Authorization failed");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }

            AppError::NotFound => {
                tracing::debug!("Resource not found");
                (StatusCode::NOT_FOUND, "Resource not found".to_string())
            }

            AppError::BadRequest(ref msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }

            AppError::Validation(ref msg) => {
                tracing::debug!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }

            AppError::Conflict(ref msg) => {
                tracing::debug!("Conflict: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }

            AppError::Encryption(ref msg) => {
                tracing::error!("Encryption error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Encryption error".to_string())
            }

            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = sonic_rs::to_string(&sonic_rs::json!({
            "error": message
        }))
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());

        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}

/// The API clients' error type.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The backend's `error` message, or the status reason when the body has none.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] sonic_rs::Error),

    /// The operation needs a logged-in identity and none is stored.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A form was submitted while it did not satisfy its rules.
    #[error("Invalid form: {0}")]
    InvalidForm(String),
}

impl ClientError {
    /// Returns the HTTP status when the backend rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A `Result` type that uses `ClientError` as the error type.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
