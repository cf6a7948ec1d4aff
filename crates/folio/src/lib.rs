//! Folio: browse a large remote dataset one page at a time and select rows
//! across pages.
//!
//! Only the current page is ever held in memory. Selection is kept as a
//! [`SelectionState`]: a "first N records" baseline plus per-record overrides,
//! so selecting a hundred thousand rows costs a single integer.
//!
//! # Architecture
//!
//! - [`record`]: the [`Record`] trait and the [`Artwork`] record.
//! - [`page`]: [`Page`] windows and paginator arithmetic.
//! - [`selection`]: the sparse cross-page selection model.
//! - [`bulk`]: the "select first N rows" input.
//! - [`source`]: the [`PagedDataSource`] trait, [`ArtworkSource`] over HTTP and
//!   [`MemorySource`] in process.
//! - [`controller`]: [`PageController`], tying loads and selection together.
//! - [`columns`]: table columns for artworks.
//! - [`config`]: [`SourceConfig`].
//!
//! # Example
//!
//! ```no_run
//! use folio::{ArtworkSource, PageController, SourceConfig};
//!
//! # async fn run() -> folio::Result<()> {
//! let source = ArtworkSource::new(SourceConfig::default())?;
//! let mut controller = PageController::new(source);
//!
//! controller.load_page(1).await?;
//! controller.submit_bulk_selection(Some(15));
//!
//! // Page 2 shows its first three rows selected.
//! controller.load_page(2).await?;
//! assert_eq!(controller.visible_selection().len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod bulk;
pub mod columns;
pub mod config;
pub mod controller;
mod error;
pub mod page;
pub mod record;
pub mod selection;
pub mod source;

pub use bulk::BulkCountInput;
pub use columns::ArtworkColumn;
pub use config::SourceConfig;
pub use controller::{FetchOutcome, FetchTicket, PageController, PageLoaded, RecordId};
pub use error::{FolioError, Result};
pub use page::{DEFAULT_PAGE_SIZE, Page, PageReport, page_count};
pub use record::{Artwork, Record};
pub use selection::SelectionState;
pub use source::{ArtworkSource, MemorySource, PageData, PagedDataSource};
