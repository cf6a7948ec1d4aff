//! HTTP responses.

use serde::de::DeserializeOwned;

use crate::error::{NetworkError, Result};

/// Longest body prefix quoted in a decode error.
const BODY_EXCERPT_LEN: usize = 80;

/// A received response whose body has not been read yet.
pub struct HttpResponse {
    inner: reqwest::Response,
}

impl HttpResponse {
    pub(crate) fn from_reqwest(response: reqwest::Response) -> Self {
        Self { inner: response }
    }

    /// The numeric status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// `true` for 4xx statuses.
    pub fn is_client_error(&self) -> bool {
        self.inner.status().is_client_error()
    }

    /// A header value, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Read the body as text.
    pub async fn text(self) -> Result<String> {
        Ok(self.inner.text().await?)
    }

    /// Read the body and decode it as JSON.
    ///
    /// A decode failure becomes [`NetworkError::Json`] quoting the start of
    /// the body, which tells an HTML error page apart from a schema change.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.inner.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| {
            let end = body.len().min(BODY_EXCERPT_LEN);
            let excerpt = String::from_utf8_lossy(&body[..end]);
            NetworkError::Json(format!("{err}; body starts with {excerpt:?}"))
        })
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`NetworkError::HttpStatus`] carrying the body text, if any.
    pub async fn error_for_status_with_body(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let status = self.status();
        let message = self.text().await.ok().filter(|body| !body.trim().is_empty());
        Err(NetworkError::HttpStatus { status, message })
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status())
            .field("url", &self.inner.url().as_str())
            .finish()
    }
}
