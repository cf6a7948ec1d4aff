//! The page controller.
//!
//! [`PageController`] owns the current page, the dataset total, the loading
//! flag and the [`SelectionState`]. Page loads are split into three steps so
//! the network call never holds a borrow of the controller:
//!
//! 1. [`request_page`](PageController::request_page) records the request and
//!    hands out a [`FetchTicket`];
//! 2. [`fetch`](PageController::fetch) returns a `'static` future that talks
//!    to the source;
//! 3. [`complete`](PageController::complete) applies the result.
//!
//! Every request bumps a generation counter and tags its ticket with it. A
//! result whose ticket is not the latest is discarded, so a slow response for
//! an earlier page can never overwrite a newer one.
//!
//! [`load_page`](PageController::load_page) runs all three steps in order
//! for callers that do not need interleaving.
//!
//! # Signals
//!
//! | Signal | Payload | Emitted when |
//! |--------|---------|--------------|
//! | `page_changed` | new page number | a different page is requested |
//! | `loading_changed` | loading flag | the flag actually changes |
//! | `page_loaded` | [`PageLoaded`] | a fetch result is applied |
//! | `selection_changed` | selected count | the selection state changes |
//! | `fetch_failed` | error message | the current request fails |

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use folio_core::logging::{span_names, targets};
use folio_core::{PerfSpan, Property, Signal};
use tracing::Instrument;

use crate::error::{FolioError, Result};
use crate::page::{self, Page, PageReport};
use crate::record::Record;
use crate::selection::SelectionState;
use crate::source::{PageData, PagedDataSource};

/// Identifier type of the records served by `S`.
pub type RecordId<S> = <<S as PagedDataSource>::Record as Record>::Id;

/// A handle for one page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    page: usize,
    generation: u64,
}

impl FetchTicket {
    /// The requested page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// The request's position in the controller's request sequence.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What [`PageController::complete`] did with a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was applied.
    Applied,
    /// A newer request superseded this one; the result was dropped.
    Stale,
    /// The fetch failed; the previous page stays on display.
    Failed(String),
}

/// Payload of [`PageController::page_loaded`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLoaded {
    pub page: usize,
    pub records: usize,
    pub total_records: usize,
}

/// Drives page loads from a [`PagedDataSource`] and keeps the cross-page
/// selection.
pub struct PageController<S: PagedDataSource> {
    source: Arc<S>,
    current_page: usize,
    page: Page<S::Record>,
    total_records: usize,
    loading: Property<bool>,
    selection: SelectionState<RecordId<S>>,
    generation: u64,

    /// Emitted with the new page number when a different page is requested.
    pub page_changed: Signal<usize>,
    /// Emitted when the loading flag changes.
    pub loading_changed: Signal<bool>,
    /// Emitted when a fetched page is applied.
    pub page_loaded: Signal<PageLoaded>,
    /// Emitted with the new selected count when the selection changes.
    pub selection_changed: Signal<usize>,
    /// Emitted with the error message when the current request fails.
    pub fetch_failed: Signal<String>,
}

impl<S: PagedDataSource> PageController<S> {
    /// Create a controller on page 1 with no records loaded.
    pub fn new(source: S) -> Self {
        Self::from_arc(Arc::new(source))
    }

    /// Create a controller sharing an existing source.
    pub fn from_arc(source: Arc<S>) -> Self {
        let page_size = source.page_size();
        Self {
            source,
            current_page: 1,
            page: Page::with_page_size(1, page_size, Vec::new()),
            total_records: 0,
            loading: Property::new(false),
            selection: SelectionState::new(),
            generation: 0,
            page_changed: Signal::new(),
            loading_changed: Signal::new(),
            page_loaded: Signal::new(),
            selection_changed: Signal::new(),
            fetch_failed: Signal::new(),
        }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    // =========================================================================
    // Page loading
    // =========================================================================

    /// Start a request for `page` (1-based).
    ///
    /// Sets the current page and the loading flag and supersedes any request
    /// still in flight. Page 0, and pages whose global indices would overflow,
    /// are rejected without touching any state.
    pub fn request_page(&mut self, page: usize) -> Result<FetchTicket> {
        if page == 0 || !page::page_fits(page, self.page_size()) {
            tracing::debug!(target: targets::CONTROLLER, page, "rejecting page request");
            return Err(FolioError::InvalidPage(page));
        }

        self.generation += 1;
        let ticket = FetchTicket {
            page,
            generation: self.generation,
        };

        if self.current_page != page {
            self.current_page = page;
            self.page_changed.emit(page);
        }
        self.set_loading(true);

        tracing::debug!(target: targets::CONTROLLER, page, generation = ticket.generation, "page requested");
        Ok(ticket)
    }

    /// Handle a zero-based page event from the table widget.
    pub fn on_page_event(&mut self, zero_based: usize) -> Result<FetchTicket> {
        let page = page::page_from_event(zero_based).ok_or(FolioError::InvalidPage(zero_based))?;
        self.request_page(page)
    }

    /// Fetch the page named by `ticket`.
    ///
    /// The future owns a handle to the source and does not borrow the
    /// controller.
    pub fn fetch(
        &self,
        ticket: FetchTicket,
    ) -> impl Future<Output = Result<PageData<S::Record>>> + Send + use<S> {
        let source = Arc::clone(&self.source);
        let span = tracing::info_span!(
            target: "folio::perf",
            "perf",
            operation = span_names::FETCH,
            page = ticket.page
        );
        async move { source.fetch_page(ticket.page).await }.instrument(span)
    }

    /// Apply the result of the request named by `ticket`.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageData<S::Record>>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            tracing::warn!(
                target: targets::CONTROLLER,
                page = ticket.page,
                current_page = self.current_page,
                "discarding stale page response"
            );
            return FetchOutcome::Stale;
        }

        let outcome = match result {
            Ok(data) => {
                self.apply_page(ticket.page, data);
                FetchOutcome::Applied
            }
            Err(err) => {
                tracing::error!(target: targets::CONTROLLER, page = ticket.page, error = %err, "failed to load page");
                let message = err.to_string();
                self.fetch_failed.emit(message.clone());
                FetchOutcome::Failed(message)
            }
        };

        self.set_loading(false);
        outcome
    }

    /// Request, fetch and apply `page`.
    pub async fn load_page(&mut self, page: usize) -> Result<FetchOutcome> {
        let ticket = self.request_page(page)?;
        let result = self.fetch(ticket).await;
        Ok(self.complete(ticket, result))
    }

    /// Fetch the current page again.
    pub async fn reload(&mut self) -> Result<FetchOutcome> {
        self.load_page(self.current_page).await
    }

    fn apply_page(&mut self, number: usize, data: PageData<S::Record>) {
        let page_size = self.source.page_size();
        let mut records = data.records;
        if records.len() > page_size {
            tracing::warn!(
                target: targets::CONTROLLER,
                page = number,
                received = records.len(),
                page_size,
                "source returned an oversized page; truncating"
            );
            records.truncate(page_size);
        }

        self.total_records = data.total_records;
        self.page = Page::with_page_size(number, page_size, records);

        tracing::info!(
            target: targets::CONTROLLER,
            page = number,
            records = self.page.len(),
            total = self.total_records,
            "page loaded"
        );
        self.page_loaded.emit(PageLoaded {
            page: number,
            records: self.page.len(),
            total_records: self.total_records,
        });
    }

    fn set_loading(&self, loading: bool) {
        if self.loading.set(loading) {
            self.loading_changed.emit(loading);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The most recently requested page.
    ///
    /// While a request is in flight, or after one failed, this can differ
    /// from [`page`](Self::page)`.number()`.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The page on display.
    pub fn page(&self) -> &Page<S::Record> {
        &self.page
    }

    pub fn records(&self) -> &[S::Record] {
        self.page.records()
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn page_size(&self) -> usize {
        self.source.page_size()
    }

    // =========================================================================
    // Paginator
    // =========================================================================

    /// Zero-based offset of the displayed page's first row.
    ///
    /// Follows [`page`](Self::page) rather than
    /// [`current_page`](Self::current_page), so it matches the rows on screen
    /// while a request is pending or after one failed.
    pub fn first_row_offset(&self) -> usize {
        self.page.first_index()
    }

    pub fn page_count(&self) -> usize {
        page::page_count(self.total_records, self.page_size())
    }

    /// The "Showing X to Y of Z entries" report for the displayed page.
    pub fn page_report(&self) -> PageReport {
        PageReport::new(self.page.number(), self.page.page_size(), self.total_records)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selection(&self) -> &SelectionState<RecordId<S>> {
        &self.selection
    }

    /// Records on the displayed page that are effectively selected.
    pub fn visible_selection(&self) -> Vec<&S::Record> {
        self.selection.visible_selection(&self.page)
    }

    /// Whether the row at `position` on the displayed page is selected.
    pub fn is_row_selected(&self, position: usize) -> bool {
        self.page
            .records()
            .get(position)
            .is_some_and(|record| {
                self.selection
                    .is_selected(&record.id(), self.page.global_index(position))
            })
    }

    /// Handle the table's selection-change event.
    ///
    /// `selected` is the full set of IDs the table now shows as selected on
    /// the displayed page.
    pub fn on_selection_change(&mut self, selected: &HashSet<RecordId<S>>) {
        let _span = PerfSpan::new(span_names::RECONCILE);
        let next = self.selection.apply_visible_selection(&self.page, selected);
        self.replace_selection(next);
    }

    /// Handle a selection-change event that carries records.
    pub fn on_selected_records<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a S::Record>,
        S::Record: 'a,
    {
        let selected: HashSet<_> = records.into_iter().map(Record::id).collect();
        self.on_selection_change(&selected);
    }

    /// Flip the row at `position` on the displayed page.
    pub fn toggle_row(&mut self, position: usize) {
        let next = self.selection.toggle(&self.page, position);
        self.replace_selection(next);
    }

    /// Select every row on the displayed page.
    pub fn select_visible(&mut self) {
        let next = self.selection.select_visible(&self.page);
        self.replace_selection(next);
    }

    /// Deselect every row on the displayed page.
    pub fn deselect_visible(&mut self) {
        let next = self.selection.deselect_visible(&self.page);
        self.replace_selection(next);
    }

    /// Select exactly the first `count` records of the dataset.
    ///
    /// `None` is ignored. The count is clamped to the dataset size. Returns
    /// the count applied.
    pub fn submit_bulk_selection(&mut self, count: Option<usize>) -> Option<usize> {
        let count = count?.min(self.total_records);
        tracing::info!(target: targets::CONTROLLER, count, total = self.total_records, "bulk selection submitted");
        self.replace_selection(SelectionState::bulk(count));
        Some(count)
    }

    /// Drop the whole selection.
    pub fn clear_selection(&mut self) {
        self.replace_selection(SelectionState::new());
    }

    /// Records selected across the whole dataset.
    pub fn selected_count(&self) -> usize {
        self.selection.selected_count()
    }

    /// The "N rows selected" banner text, or `None` when nothing is selected.
    pub fn selection_label(&self) -> Option<String> {
        match self.selected_count() {
            0 => None,
            count => Some(format!("{count} rows selected")),
        }
    }

    fn replace_selection(&mut self, next: SelectionState<RecordId<S>>) {
        if next == self.selection {
            return;
        }
        self.selection = next;
        let count = self.selection.selected_count();
        tracing::debug!(
            target: targets::CONTROLLER,
            count,
            baseline = self.selection.bulk_baseline(),
            overrides = self.selection.overrides().len(),
            "selection changed"
        );
        self.selection_changed.emit(count);
    }
}

impl<S: PagedDataSource> std::fmt::Debug for PageController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageController")
            .field("current_page", &self.current_page)
            .field("displayed_page", &self.page.number())
            .field("records", &self.page.len())
            .field("total_records", &self.total_records)
            .field("loading", &self.loading.get())
            .field("generation", &self.generation)
            .field("selected", &self.selection.selected_count())
            .finish()
    }
}
