// errors.rs
use crate::domain::validation::ValidationError;
use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic
/// (routing, request decoding, query validation).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// Field-level failures, kept in the order they were detected.
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<ValidationError>),
    #[error("Serialization Error: {0}")]
    Serialization(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Serialization(err.to_string())
    }
}
