//! GET requests.

use std::time::Duration;

use super::client::HttpClient;
use super::response::HttpResponse;
use crate::error::Result;

/// A request that has been assembled but not sent.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Target URL without the query string.
    pub url: String,
    pub headers: http::HeaderMap,
    /// Query pairs in insertion order. Repeated keys are kept.
    pub query: Vec<(String, String)>,
    /// Overrides the client timeout when set.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// The first value given for `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_str()))
    }
}

/// Accumulates a request against an [`HttpClient`].
pub struct HttpRequestBuilder {
    client: HttpClient,
    request: HttpRequest,
}

impl HttpRequestBuilder {
    pub(crate) fn new(client: HttpClient, url: String) -> Self {
        let request = HttpRequest {
            url,
            headers: http::HeaderMap::new(),
            query: Vec::new(),
            timeout: None,
        };
        Self { client, request }
    }

    /// Add a header. Invalid names or values are dropped silently.
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

    pub fn build(self) -> HttpRequest {
        self.request
    }

    /// Send once and wait for the response head.
    pub async fn send(self) -> Result<HttpResponse> {
        self.client.execute(self.request).await
    }
}
