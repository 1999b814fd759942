use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session storage error: {0}")]
    Session(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Server-supplied `message` field, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Failures that mutating calls paper over with a locally synthesized
    /// record: the backend was unreachable or the endpoint does not exist.
    pub fn is_demo_fallback(&self) -> bool {
        match self {
            AppError::Network(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            AppError::Status { status, .. } => *status == StatusCode::NOT_FOUND,
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
