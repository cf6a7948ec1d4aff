//! HTTP plumbing for Folio's remote page sources.
//!
//! Everything here is read-only: requests are GETs, and each is sent exactly
//! once. Whether a failure deserves another attempt is the caller's call.
//!
//! ```ignore
//! use std::time::Duration;
//! use folio_net::{HttpClient, RestApiClient};
//!
//! let api = RestApiClient::builder("https://api.artic.edu/api/v1")
//!     .http_client_builder(HttpClient::builder().timeout(Duration::from_secs(10)))
//!     .accept_json()
//!     .build()?;
//!
//! let page: serde_json::Value = api.get("/artworks").query("page", 1).json_response().await?;
//! ```
//!
//! Failures surface as [`NetworkError`]; a non-2xx answer keeps its status and
//! body text, and a body that fails to decode is quoted in the error.

mod error;
pub mod http;

pub use error::{NetworkError, Result};
pub use http::{
    HttpClient, HttpClientBuilder, HttpClientConfig, HttpRequest, HttpRequestBuilder, HttpResponse,
    RestApiClient, RestApiClientBuilder, RestApiRequestBuilder,
};
