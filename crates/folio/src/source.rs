//! Paged data sources.
//!
//! A [`PagedDataSource`] serves one page of records at a time together with
//! the dataset's total size. Records must arrive in a stable total order so
//! that global indices mean the same thing on every fetch.

use std::future::Future;

use folio_core::logging::targets;
use folio_net::http::{RestApiClient, RestApiRequestBuilder};
use folio_net::HttpClient;
use serde::Deserialize;
use tracing::Instrument;

use crate::config::SourceConfig;
use crate::error::{FolioError, Result};
use crate::page::DEFAULT_PAGE_SIZE;
use crate::record::{Artwork, Record};

/// One page of records and the dataset's total size.
#[derive(Clone, Debug, PartialEq)]
pub struct PageData<R> {
    pub records: Vec<R>,
    pub total_records: usize,
}

impl<R> PageData<R> {
    pub fn new(records: Vec<R>, total_records: usize) -> Self {
        Self {
            records,
            total_records,
        }
    }
}

/// A source of records served one page at a time.
///
/// Implementations are shared behind an `Arc` so fetches can run without
/// borrowing the controller.
pub trait PagedDataSource: Send + Sync + 'static {
    /// The record type served.
    type Record: Record + Clone + Send + Sync + 'static;

    /// Records per page.
    fn page_size(&self) -> usize {
        DEFAULT_PAGE_SIZE
    }

    /// Fetch page `page` (1-based).
    ///
    /// Failures are returned as-is; the source never retries.
    fn fetch_page(&self, page: usize) -> impl Future<Output = Result<PageData<Self::Record>>> + Send;
}

#[derive(Debug, Deserialize)]
struct ApiResponse<R> {
    data: Vec<R>,
    pagination: ApiPagination,
}

#[derive(Debug, Deserialize)]
struct ApiPagination {
    total: usize,
}

/// Artworks served by the art-institute REST API.
///
/// Issues `GET {base_url}/{endpoint}?page=N` and reads the
/// `{ "data": [...], "pagination": { "total": N } }` envelope.
#[derive(Clone, Debug)]
pub struct ArtworkSource {
    api: RestApiClient,
    config: SourceConfig,
}

impl ArtworkSource {
    /// Build a source and its HTTP client from `config`.
    pub fn new(config: SourceConfig) -> Result<Self> {
        config.validate()?;

        let mut http = HttpClient::builder().timeout(config.timeout());
        if let Some(user_agent) = &config.user_agent {
            http = http.user_agent(user_agent.clone());
        }

        let api = RestApiClient::builder(config.base_url.clone())
            .http_client_builder(http)
            .accept_json()
            .build()?;

        Ok(Self { api, config })
    }

    /// Build a source on an existing REST client.
    ///
    /// The client's base URL takes precedence over `config.base_url`.
    pub fn with_client(api: RestApiClient, config: SourceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { api, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// The request that fetches `page`.
    pub fn page_request(&self, page: usize) -> RestApiRequestBuilder {
        let request = self.api.get(&self.config.endpoint).query("page", page);
        if self.config.page_size == DEFAULT_PAGE_SIZE {
            request
        } else {
            request.query("limit", self.config.page_size)
        }
    }
}

impl PagedDataSource for ArtworkSource {
    type Record = Artwork;

    fn page_size(&self) -> usize {
        self.config.page_size
    }

    fn fetch_page(&self, page: usize) -> impl Future<Output = Result<PageData<Artwork>>> + Send {
        let request = self.page_request(page);
        let span = tracing::debug_span!(target: targets::SOURCE, "fetch_page", page);

        async move {
            let body: ApiResponse<Artwork> = request.json_response().await.map_err(|err| {
                tracing::debug!(
                    target: targets::SOURCE,
                    error = %err,
                    transport = err.is_transport(),
                    "artworks request failed"
                );
                FolioError::from(err)
            })?;
            tracing::debug!(
                target: targets::SOURCE,
                records = body.data.len(),
                total = body.pagination.total,
                "artworks page decoded"
            );
            Ok::<_, FolioError>(PageData::new(body.data, body.pagination.total))
        }
        .instrument(span)
    }
}

/// An in-process source over a fixed list of records.
#[derive(Clone, Debug)]
pub struct MemorySource<R> {
    records: Vec<R>,
    page_size: usize,
}

impl<R> MemorySource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self::with_page_size(records, DEFAULT_PAGE_SIZE)
    }

    /// A source paging `records` by `page_size`. A size of 0 is raised to 1.
    pub fn with_page_size(records: Vec<R>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }
}

impl<R: Clone> MemorySource<R> {
    /// Slice out page `page`. Pages past the end are empty.
    pub fn page(&self, page: usize) -> Result<PageData<R>> {
        if page == 0 {
            return Err(FolioError::InvalidPage(page));
        }
        let start = (page - 1).saturating_mul(self.page_size).min(self.records.len());
        let end = start.saturating_add(self.page_size).min(self.records.len());
        Ok(PageData::new(
            self.records[start..end].to_vec(),
            self.records.len(),
        ))
    }
}

impl<R> PagedDataSource for MemorySource<R>
where
    R: Record + Clone + Send + Sync + 'static,
{
    type Record = R;

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn fetch_page(&self, page: usize) -> impl Future<Output = Result<PageData<R>>> + Send {
        std::future::ready(self.page(page))
    }
}
