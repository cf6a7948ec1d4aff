//! Core systems for Folio.
//!
//! This crate provides the plumbing shared by the networking and model crates:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Value cells with change detection
//! - **Logging**: `tracing` targets, span names and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use folio_core::Signal;
//!
//! // Create a signal that notifies when the selected count changes
//! let count_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = count_changed.connect(|count| {
//!     println!("{} rows selected", count);
//! });
//!
//! count_changed.emit(12);
//!
//! // Disconnect when done
//! count_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use folio_core::{Property, Signal};
//!
//! struct Loader {
//!     loading: Property<bool>,
//!     loading_changed: Signal<bool>,
//! }
//!
//! impl Loader {
//!     fn set_loading(&self, loading: bool) {
//!         if self.loading.set(loading) {
//!             self.loading_changed.emit(loading);
//!         }
//!     }
//! }
//!
//! let loader = Loader { loading: Property::new(false), loading_changed: Signal::new() };
//! loader.set_loading(true);
//! assert!(loader.loading.get());
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::SignalError;
pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
