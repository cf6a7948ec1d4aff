//! GET requests and JSON APIs.
//!
//! [`HttpClient`] sends single requests; [`RestApiClient`] layers a base URL,
//! shared headers and credentials on top of it.

mod client;
mod request;
mod response;
mod rest_api;

pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig};
pub use request::{HttpRequest, HttpRequestBuilder};
pub use response::HttpResponse;
pub use rest_api::{RestApiClient, RestApiClientBuilder, RestApiRequestBuilder};
