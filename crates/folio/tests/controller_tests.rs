//! Page controller behavior: request ordering, failures and signals.

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use folio::{
    FetchOutcome, FolioError, MemorySource, PageController, PageData, PageLoaded, PagedDataSource,
    Record, Result,
};
use folio_net::NetworkError;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: u32,
}

impl Record for Item {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn items(n: u32) -> Vec<Item> {
    (0..n).map(|id| Item { id }).collect()
}

/// Serves pages after a per-page delay and fails on selected pages.
struct ScriptedSource {
    inner: MemorySource<Item>,
    delays: Vec<(usize, Duration)>,
    failing: HashSet<usize>,
}

impl ScriptedSource {
    fn new(n: u32) -> Self {
        Self {
            inner: MemorySource::new(items(n)),
            delays: Vec::new(),
            failing: HashSet::new(),
        }
    }

    fn delay(mut self, page: usize, delay: Duration) -> Self {
        self.delays.push((page, delay));
        self
    }

    fn fail(mut self, page: usize) -> Self {
        self.failing.insert(page);
        self
    }
}

impl PagedDataSource for ScriptedSource {
    type Record = Item;

    fn fetch_page(&self, page: usize) -> impl Future<Output = Result<PageData<Item>>> + Send {
        let delay = self
            .delays
            .iter()
            .find(|(p, _)| *p == page)
            .map(|(_, d)| *d)
            .unwrap_or_default();
        let result = if self.failing.contains(&page) {
            Err(FolioError::Source(NetworkError::HttpStatus {
                status: 503,
                message: Some("upstream unavailable".into()),
            }))
        } else {
            self.inner.page(page)
        };

        async move {
            tokio::time::sleep(delay).await;
            result
        }
    }
}

#[tokio::test]
async fn test_load_page_applies_records_and_total() {
    let mut c = PageController::new(ScriptedSource::new(30));

    let loaded = Arc::new(Mutex::new(Vec::new()));
    let l = loaded.clone();
    c.page_loaded.connect(move |event| l.lock().unwrap().push(event.clone()));

    assert_eq!(c.load_page(2).await.unwrap(), FetchOutcome::Applied);
    assert_eq!(c.current_page(), 2);
    assert_eq!(c.total_records(), 30);
    assert_eq!(c.records().first(), Some(&Item { id: 12 }));
    assert!(!c.is_loading());
    assert_eq!(
        *loaded.lock().unwrap(),
        vec![PageLoaded {
            page: 2,
            records: 12,
            total_records: 30
        }]
    );
}

#[tokio::test]
async fn test_late_response_for_earlier_page_is_discarded() {
    let source = ScriptedSource::new(60).delay(2, Duration::from_millis(80));
    let mut c = PageController::new(source);

    let slow = c.request_page(2).unwrap();
    let slow_fetch = tokio::spawn(c.fetch(slow));

    let fast = c.request_page(3).unwrap();
    let fast_fetch = tokio::spawn(c.fetch(fast));

    let fast_result = fast_fetch.await.unwrap();
    assert_eq!(c.complete(fast, fast_result), FetchOutcome::Applied);
    assert!(!c.is_loading());

    let slow_result = slow_fetch.await.unwrap();
    assert_eq!(c.complete(slow, slow_result), FetchOutcome::Stale);

    assert_eq!(c.current_page(), 3);
    assert_eq!(c.page().number(), 3);
    assert_eq!(c.records().first(), Some(&Item { id: 24 }));
}

#[tokio::test]
async fn test_stale_response_does_not_clear_loading() {
    let mut c = PageController::new(ScriptedSource::new(60));

    let first = c.request_page(2).unwrap();
    let first_result = c.fetch(first).await;
    let second = c.request_page(4).unwrap();

    assert_eq!(c.complete(first, first_result), FetchOutcome::Stale);
    assert!(c.is_loading());

    let second_result = c.fetch(second).await;
    assert_eq!(c.complete(second, second_result), FetchOutcome::Applied);
    assert!(!c.is_loading());
}

#[tokio::test]
async fn test_failed_fetch_keeps_page_and_selection() {
    let mut c = PageController::new(ScriptedSource::new(60).fail(3));
    c.load_page(2).await.unwrap();
    c.submit_bulk_selection(Some(15));
    c.toggle_row(5);
    let selection = c.selection().clone();

    let failures = Arc::new(Mutex::new(Vec::new()));
    let f = failures.clone();
    c.fetch_failed.connect(move |message| f.lock().unwrap().push(message.clone()));

    let outcome = c.load_page(3).await.unwrap();

    let message = match outcome {
        FetchOutcome::Failed(message) => message,
        other => panic!("expected failure, got {other:?}"),
    };
    assert!(message.contains("503"), "{message}");
    assert_eq!(*failures.lock().unwrap(), vec![message]);

    assert!(!c.is_loading());
    assert_eq!(c.current_page(), 3);
    assert_eq!(c.page().number(), 2);
    assert_eq!(c.records().len(), 12);
    assert_eq!(c.total_records(), 60);
    assert_eq!(c.selection(), &selection);
}

#[tokio::test]
async fn test_reload_retries_requested_page() {
    let mut c = PageController::new(ScriptedSource::new(60));
    c.load_page(4).await.unwrap();

    assert_eq!(c.reload().await.unwrap(), FetchOutcome::Applied);
    assert_eq!(c.page().number(), 4);
}

#[tokio::test]
async fn test_page_event_is_zero_based() {
    let mut c = PageController::new(ScriptedSource::new(60));
    let ticket = c.on_page_event(0).unwrap();
    assert_eq!(ticket.page(), 1);

    let ticket = c.on_page_event(4).unwrap();
    let result = c.fetch(ticket).await;
    c.complete(ticket, result);

    assert_eq!(c.current_page(), 5);
    assert_eq!(c.first_row_offset(), 48);
    assert_eq!(c.page_count(), 5);
}

#[tokio::test]
async fn test_selection_edits_apply_to_displayed_page_while_loading() {
    let mut c = PageController::new(ScriptedSource::new(60));
    c.load_page(1).await.unwrap();

    // Page 2 is requested but not yet applied; edits still target page 1.
    let ticket = c.request_page(2).unwrap();
    c.toggle_row(0);
    assert_eq!(c.selection().override_for(&0), Some(true));

    let result = c.fetch(ticket).await;
    c.complete(ticket, result);
    assert!(!c.is_row_selected(0));
    assert_eq!(c.selected_count(), 1);
}

#[tokio::test]
async fn test_loading_signal_sequence() {
    let mut c = PageController::new(ScriptedSource::new(30));
    let flags = Arc::new(Mutex::new(Vec::new()));
    let f = flags.clone();
    c.loading_changed.connect(move |loading| f.lock().unwrap().push(*loading));

    c.load_page(1).await.unwrap();
    c.load_page(2).await.unwrap();

    assert_eq!(*flags.lock().unwrap(), vec![true, false, true, false]);
}

#[tokio::test]
async fn test_bulk_clamped_to_loaded_total() {
    let mut c = PageController::new(ScriptedSource::new(30));

    // Nothing loaded yet: the total is 0.
    assert_eq!(c.submit_bulk_selection(Some(5)), Some(0));
    assert_eq!(c.selection_label(), None);

    c.load_page(1).await.unwrap();
    assert_eq!(c.submit_bulk_selection(Some(45)), Some(30));
    assert_eq!(c.selection_label().as_deref(), Some("30 rows selected"));
}
