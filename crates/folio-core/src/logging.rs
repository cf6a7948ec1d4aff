//! Tracing targets and spans.
//!
//! Folio only emits `tracing` events; the application picks the subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("folio=debug,folio_net=info")
//!     .init();
//! ```
//!
//! Each subsystem logs under one of the [`targets`], so a filter such as
//! `folio::selection=debug` isolates a single area.

/// Names of the spans Folio opens.
pub mod span_names {
    /// One page request, from ticket to completion.
    pub const FETCH: &str = "folio::fetch";
    /// Applying a visible-row selection to the sparse model.
    pub const RECONCILE: &str = "folio::reconcile";
}

/// Log targets, one per subsystem.
pub mod targets {
    pub const CORE: &str = "folio_core";
    pub const SIGNAL: &str = "folio_core::signal";
    pub const HTTP: &str = "folio_net::http";
    pub const SELECTION: &str = "folio::selection";
    pub const CONTROLLER: &str = "folio::controller";
    pub const SOURCE: &str = "folio::source";
}

/// Keeps an `info` span on the `folio::perf` target entered until dropped.
///
/// With a timing-aware subscriber this measures the enclosing scope.
#[derive(Debug)]
pub struct PerfSpan {
    _entered: tracing::span::EnteredSpan,
}

impl PerfSpan {
    pub fn new(operation: &'static str) -> Self {
        Self {
            _entered: tracing::info_span!(target: "folio::perf", "perf", operation).entered(),
        }
    }
}

/// `tracing::debug!` on the [`targets::CORE`] target.
#[macro_export]
macro_rules! folio_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "folio_core", $($arg)*)
    };
}
