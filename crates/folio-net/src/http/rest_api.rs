//! JSON APIs rooted at a base URL.
//!
//! A [`RestApiClient`] holds the base URL and headers shared by every call,
//! so call sites only name the resource path:
//!
//! ```ignore
//! use folio_net::http::RestApiClient;
//!
//! let api = RestApiClient::builder("https://api.artic.edu/api/v1")
//!     .accept_json()
//!     .build()?;
//!
//! let page: ArtworksPage = api.get("/artworks").query("page", 2).json_response().await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::client::{HttpClient, HttpClientBuilder};
use super::request::HttpRequest;
use super::response::HttpResponse;
use crate::error::Result;

/// How the builder obtains its HTTP client.
enum ClientSource {
    Shared(HttpClient),
    Build(HttpClientBuilder),
}

/// Builder for [`RestApiClient`].
pub struct RestApiClientBuilder {
    base_url: String,
    client: ClientSource,
    headers: http::HeaderMap,
}

impl RestApiClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: ClientSource::Build(HttpClientBuilder::new()),
            headers: http::HeaderMap::new(),
        }
    }

    /// Reuse `client` and its connection pool.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.client = ClientSource::Shared(client);
        self
    }

    /// Build a fresh client from `builder`.
    pub fn http_client_builder(mut self, builder: HttpClientBuilder) -> Self {
        self.client = ClientSource::Build(builder);
        self
    }

    /// Send `Accept: application/json` with every call.
    pub fn accept_json(mut self) -> Self {
        self.headers.insert(
            http::header::ACCEPT,
            http::HeaderValue::from_static("application/json"),
        );
        self
    }

    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<RestApiClient> {
        url::Url::parse(&self.base_url)?;
        let http = match self.client {
            ClientSource::Shared(client) => client,
            ClientSource::Build(builder) => builder.build()?,
        };

        Ok(RestApiClient {
            shared: Arc::new(Shared {
                http,
                base_url: self.base_url.trim_end_matches('/').to_owned(),
                headers: self.headers,
            }),
        })
    }
}

struct Shared {
    http: HttpClient,
    base_url: String,
    headers: http::HeaderMap,
}

/// A client for one JSON API. Clones share state.
#[derive(Clone)]
pub struct RestApiClient {
    shared: Arc<Shared>,
}

impl RestApiClient {
    pub fn builder(base_url: impl Into<String>) -> RestApiClientBuilder {
        RestApiClientBuilder::new(base_url)
    }

    /// The base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.shared.base_url
    }

    pub fn http_client(&self) -> &HttpClient {
        &self.shared.http
    }

    /// `path` joined onto the base URL with exactly one slash.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.shared.base_url, path.trim_start_matches('/'))
    }

    /// Start a GET call for `path`.
    pub fn get(&self, path: &str) -> RestApiRequestBuilder {
        RestApiRequestBuilder {
            request: HttpRequest {
                url: self.url_for(path),
                headers: self.shared.headers.clone(),
                query: Vec::new(),
                timeout: None,
            },
            client: self.clone(),
        }
    }
}

impl std::fmt::Debug for RestApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestApiClient")
            .field("base_url", &self.shared.base_url)
            .finish()
    }
}

/// One pending API call.
pub struct RestApiRequestBuilder {
    client: RestApiClient,
    request: HttpRequest,
}

impl RestApiRequestBuilder {
    /// Add a header. Invalid names or values are skipped.
    pub fn header(
        mut self,
        name: impl TryInto<http::HeaderName>,
        value: impl TryInto<http::HeaderValue>,
    ) -> Self {
        if let (Ok(name), Ok(value)) = (name.try_into(), value.try_into()) {
            self.request.headers.insert(name, value);
        }
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.request.query.push((key.into(), value.to_string()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }

    /// The request as it would be sent, client headers included.
    pub fn build(self) -> HttpRequest {
        self.request
    }

    pub async fn send(self) -> Result<HttpResponse> {
        let http = self.client.shared.http.clone();
        http.execute(self.build()).await
    }

    /// Send, reject non-2xx statuses, and decode the body.
    pub async fn json_response<T: DeserializeOwned>(self) -> Result<T> {
        self.send()
            .await?
            .error_for_status_with_body()
            .await?
            .json()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_http_client() {
        let http = HttpClient::builder().max_redirects(2).build().unwrap();
        let api = RestApiClient::builder("https://api.example.com")
            .http_client(http)
            .build()
            .unwrap();
        assert_eq!(api.http_client().config().max_redirects, 2);
    }

    #[test]
    fn test_request_header_adds_to_client_headers() {
        let api = RestApiClient::builder("https://api.example.com")
            .accept_json()
            .build()
            .unwrap();
        let request = api
            .get("items")
            .header("X-Trace", "42")
            .header("bad header", "dropped")
            .build();

        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers["accept"], "application/json");
        assert_eq!(request.headers["x-trace"], "42");
    }
}
