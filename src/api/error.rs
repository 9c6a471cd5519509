use reqwest::StatusCode;
use thiserror::Error;

/// Result type used throughout the client.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Possible error types while talking to the CloudCenter API.
///
/// Transport failures, non-success statuses and undecodable bodies are kept
/// apart so callers can tell "the server rejected me" from "the server sent
/// something I can't parse".
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: connection refused, DNS, TLS or timeout.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered outside of the 2xx range.
    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// We received a successful status but couldn't read its body.
    #[error("unable to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body didn't match the shape we expected.
    #[error("unable to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The record we were given couldn't be serialized.
    #[error("unable to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A scan over a collection page found no matching record.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// A record was addressed by identity, but it has none yet.
    #[error("{resource} has no id to address it by")]
    MissingId { resource: &'static str },

    /// The id would not address a single record, e.g. `.` or `..`.
    #[error("{id:?} is not a valid {resource} id")]
    InvalidId { resource: &'static str, id: String },

    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("unable to construct HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// The HTTP status code, if the server got far enough to send one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) | ApiError::Body(err) => err.status(),
            _ => None,
        }
    }

    /// Whether this is either a logical lookup miss or an HTTP 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            ApiError::NotFound { .. } => true,
            ApiError::Status { status, .. } => *status == StatusCode::NOT_FOUND,
            _ => false,
        }
    }
}
