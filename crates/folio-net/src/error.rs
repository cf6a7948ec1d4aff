//! Networking errors.

use std::fmt;

/// Why a request produced no usable body.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// The transport failed for a reason not covered below.
    Request(String),
    InvalidUrl(String),
    /// The client or per-request timeout elapsed.
    Timeout,
    /// The server could not be reached.
    Connection(String),
    InvalidHeader(String),
    /// The body was not the JSON the caller expected.
    Json(String),
    /// The server answered with a non-2xx status.
    HttpStatus {
        status: u16,
        /// The response body, when it was non-blank.
        message: Option<String>,
    },
    TooManyRedirects,
}

impl NetworkError {
    /// The status code of an [`NetworkError::HttpStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the server was never heard from.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout | Self::Connection(_) | Self::Request(_))
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "HTTP request error: {msg}"),
            Self::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            Self::Timeout => f.write_str("Request timed out"),
            Self::Connection(msg) => write!(f, "Connection error: {msg}"),
            Self::InvalidHeader(msg) => write!(f, "Invalid header: {msg}"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
            Self::HttpStatus {
                status,
                message: Some(msg),
            } => write!(f, "HTTP {status}: {msg}"),
            Self::HttpStatus {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
            Self::TooManyRedirects => f.write_str("Too many redirects"),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        match () {
            _ if err.is_timeout() => Self::Timeout,
            _ if err.is_connect() => Self::Connection(err.to_string()),
            _ if err.is_redirect() => Self::TooManyRedirects,
            _ if err.is_decode() => Self::Json(err.to_string()),
            _ => Self::Request(err.to_string()),
        }
    }
}

impl From<url::ParseError> for NetworkError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
