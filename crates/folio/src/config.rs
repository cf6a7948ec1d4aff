//! Data source configuration.
//!
//! Configuration is code-first: start from [`SourceConfig::default`] and
//! adjust with the `with_*` setters. A TOML file may be loaded instead; every
//! key is optional and falls back to the default.
//!
//! ```toml
//! base_url = "https://api.artic.edu/api/v1"
//! endpoint = "artworks"
//! page_size = 12
//! timeout_secs = 30
//! user_agent = "folio-browse/0.3"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::page::DEFAULT_PAGE_SIZE;

/// Default base URL of the art-institute public API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Default collection endpoint under the base URL.
pub const DEFAULT_ENDPOINT: &str = "artworks";

/// Settings for an HTTP-backed paged source.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// API root, without the collection path.
    pub base_url: String,
    /// Collection path appended to the base URL.
    pub endpoint: String,
    /// Records per page.
    pub page_size: usize,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent override.
    pub user_agent: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl SourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that the values can drive a source.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(FolioError::config("page_size", "must be greater than zero"));
        }
        if self.timeout_secs == 0 {
            return Err(FolioError::config("timeout_secs", "must be greater than zero"));
        }
        if self.endpoint.trim_matches('/').is_empty() {
            return Err(FolioError::config("endpoint", "must not be empty"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| FolioError::config("base_url", e.to_string()))?;
        Ok(())
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
