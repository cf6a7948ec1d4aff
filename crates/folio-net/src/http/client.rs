//! The shared HTTP client.

use std::sync::Arc;
use std::time::Duration;

use folio_core::logging::targets;
use reqwest::redirect::Policy;

use super::request::{HttpRequest, HttpRequestBuilder};
use super::response::HttpResponse;
use crate::error::{NetworkError, Result};

/// Settings applied to every request a client sends.
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Whole-request timeout, from connect to the end of the body.
    pub timeout: Option<Duration>,
    /// Connection establishment timeout.
    pub connect_timeout: Option<Duration>,
    /// Follow 3xx responses.
    pub follow_redirects: bool,
    /// Redirect hops allowed before giving up.
    pub max_redirects: usize,
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            follow_redirects: true,
            max_redirects: 10,
            user_agent: Some(format!("Folio/{} (Rust)", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl HttpClientConfig {
    fn redirect_policy(&self) -> Policy {
        if self.follow_redirects {
            Policy::limited(self.max_redirects)
        } else {
            Policy::none()
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
    default_headers: http::HeaderMap,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Limit redirect hops. A limit of 0 disables redirects.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.follow_redirects = max > 0;
        self.config.max_redirects = max;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Send `name: value` with every request.
    ///
    /// Unlike the per-request builders, an invalid header is an error here.
    pub fn default_header(
        mut self,
        name: impl TryInto<http::HeaderName>,
        value: impl TryInto<http::HeaderValue>,
    ) -> Result<Self> {
        let name = name
            .try_into()
            .map_err(|_| NetworkError::InvalidHeader("invalid default header name".into()))?;
        let value = value
            .try_into()
            .map_err(|_| NetworkError::InvalidHeader("invalid default header value".into()))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn build(self) -> Result<HttpClient> {
        let Self {
            config,
            default_headers,
        } = self;

        let mut builder = reqwest::Client::builder()
            .redirect(config.redirect_policy())
            .default_headers(default_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(HttpClient {
            inner: Arc::new(ClientInner {
                client: builder.build()?,
                config,
            }),
        })
    }
}

struct ClientInner {
    client: reqwest::Client,
    config: HttpClientConfig,
}

/// A GET client with a shared connection pool.
///
/// Clones share the pool and configuration.
///
/// ```ignore
/// use folio_net::http::HttpClient;
///
/// let client = HttpClient::new();
/// let page = client.get("https://api.artic.edu/api/v1/artworks").query("page", 2).send().await?;
/// assert!(page.is_success());
/// ```
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<ClientInner>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// A client with [`HttpClientConfig::default`].
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized. Use
    /// [`HttpClient::builder`] to handle that failure instead.
    pub fn new() -> Self {
        HttpClientBuilder::new()
            .build()
            .expect("Failed to create HTTP client with default configuration")
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.inner.config
    }

    /// Start a GET request for `url`.
    pub fn get(&self, url: impl AsRef<str>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(self.clone(), url.as_ref().to_string())
    }

    /// Send a built request once.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            url,
            headers,
            query,
            timeout,
        } = request;

        let mut url = url::Url::parse(&url)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(&query);
        }
        tracing::debug!(target: targets::HTTP, %url, "GET");

        let mut outgoing = self.inner.client.get(url).headers(headers);
        if let Some(timeout) = timeout {
            outgoing = outgoing.timeout(timeout);
        }

        match outgoing.send().await {
            Ok(response) => {
                tracing::debug!(target: targets::HTTP, status = response.status().as_u16(), "response");
                Ok(HttpResponse::from_reqwest(response))
            }
            Err(err) => {
                tracing::debug!(target: targets::HTTP, error = %err, "request failed");
                Err(err.into())
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_redirects_disables_following() {
        let client = HttpClient::builder().max_redirects(0).build().unwrap();
        assert!(!client.config().follow_redirects);

        let client = HttpClient::builder().max_redirects(3).build().unwrap();
        assert!(client.config().follow_redirects);
        assert_eq!(client.config().max_redirects, 3);
    }

    #[test]
    fn test_default_user_agent_names_version() {
        let config = HttpClientConfig::default();
        let expected = format!("Folio/{} (Rust)", env!("CARGO_PKG_VERSION"));
        assert_eq!(config.user_agent.as_deref(), Some(expected.as_str()));
    }
}
