//! Error types for Folio.

use std::path::PathBuf;

use folio_net::NetworkError;

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

/// Errors raised at Folio's boundaries.
///
/// The selection model itself never fails; errors come from page requests,
/// user input, the data source and configuration.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A page number of 0, or one whose row indices overflow `usize`.
    #[error("Invalid page number {0}: pages are numbered from 1 and must fit the index range")]
    InvalidPage(usize),

    /// The bulk selection input could not be read as a count.
    #[error("Invalid bulk selection count '{input}': {reason}")]
    InvalidBulkCount { input: String, reason: String },

    /// The paged data source failed to deliver a page.
    #[error("Data source error: {0}")]
    Source(#[from] NetworkError),

    /// A configuration value is out of range.
    #[error("Invalid configuration value for '{field}': {message}")]
    Config { field: &'static str, message: String },

    /// The configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`SourceConfig`](crate::SourceConfig).
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl FolioError {
    /// Create a configuration error.
    pub fn config(field: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            field,
            message: message.into(),
        }
    }

    /// Create a bulk count error.
    pub fn invalid_bulk_count(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBulkCount {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
