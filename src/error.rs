// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names one failure mode. Anything raised while talking to
//! the Smartsheet API (transport, error bodies, undecodable bodies) counts
//! as a remote fetch failure and aborts whatever aggregation was running.

use std::fmt;
use thiserror::Error;

/// Smartsheet API error codes as a typed vocabulary.
///
/// The API reports a numeric `errorCode` in every error body. Matching on
/// these variants avoids sprinkling magic numbers through recovery code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmartsheetErrorCode {
    /// The access token is missing or invalid
    InvalidToken,
    /// The access token has expired
    TokenExpired,
    /// The token's user cannot perform this action
    NotAuthorized,
    /// The requested object does not exist or is inaccessible
    NotFound,
    /// Request body or parameters failed validation
    InvalidRequest,
    /// Smartsheet internal server error
    InternalError,
    /// Smartsheet is down for maintenance
    Maintenance,
    /// The server timed out processing the request
    ServerTimeout,
    /// API rate limit exceeded
    RateLimited,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(i64),
}

impl SmartsheetErrorCode {
    /// Maps the API's numeric `errorCode` into the typed vocabulary.
    pub fn from_api_code(code: i64) -> Self {
        match code {
            1001 | 1002 => Self::InvalidToken,
            1003 => Self::TokenExpired,
            1004 => Self::NotAuthorized,
            1006 => Self::NotFound,
            1008 | 1012 | 1018 => Self::InvalidRequest,
            4000 => Self::InternalError,
            4001 => Self::Maintenance,
            4002 => Self::ServerTimeout,
            4003 => Self::RateLimited,
            other => Self::Unknown(other),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error is transient and worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited | Self::InternalError | Self::Maintenance | Self::ServerTimeout => {
                true
            }
            Self::HttpStatus(status) => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound | Self::HttpStatus(404))
    }
}

impl fmt::Display for SmartsheetErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken => write!(f, "invalid_token"),
            Self::TokenExpired => write!(f, "token_expired"),
            Self::NotAuthorized => write!(f, "not_authorized"),
            Self::NotFound => write!(f, "not_found"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::InternalError => write!(f, "internal_error"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::ServerTimeout => write!(f, "server_timeout"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "error_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Smartsheet API returned an error ({code}): {message}")]
    SmartsheetService {
        code: SmartsheetErrorCode,
        message: String,
        status: reqwest::StatusCode,
        ref_id: Option<String>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{operation} sent {sent} rows but {returned} came back")]
    UnexpectedRowCount {
        operation: &'static str,
        sent: usize,
        returned: usize,
    },

    #[error("Attachment {attachment} has no download URL")]
    MissingAttachmentUrl { attachment: String },

    #[error("{0}")]
    Unsupported(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether this error came from the remote listing capability.
    pub fn is_remote_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::NetworkFailure(_) | Self::SmartsheetService { .. } | Self::MalformedResponse(_)
        )
    }

    /// The typed API error code, when the API reported one.
    pub fn service_code(&self) -> Option<&SmartsheetErrorCode> {
        match self {
            Self::SmartsheetService { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
