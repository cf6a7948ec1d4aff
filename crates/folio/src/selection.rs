//! Sparse selection over a paged dataset.
//!
//! The dataset is too large to enumerate, and only one page of records is
//! ever in memory. [`SelectionState`] therefore records selection as a *bulk
//! baseline* plus per-record *overrides*:
//!
//! - every record whose global index is below the baseline is implicitly
//!   selected;
//! - an override maps a record ID to an explicit selected/unselected status
//!   that wins over the baseline.
//!
//! An override is only stored where it disagrees with the baseline. Any
//! update that brings a record back in line with its implicit status removes
//! the override, so the map stays as small as the set of user deviations.
//!
//! # Reconciliation
//!
//! When the table reports a new visible selection, each visible record is
//! reconciled with this table:
//!
//! | implicitly selected | now selected | override     |
//! |---------------------|--------------|--------------|
//! | yes                 | yes          | removed      |
//! | yes                 | no           | set to false |
//! | no                  | yes          | set to true  |
//! | no                  | no           | removed      |
//!
//! Overrides for records on other pages are never touched.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use folio::{Page, Record, SelectionState};
//!
//! #[derive(Clone)]
//! struct Row(u32);
//! impl Record for Row {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.0 }
//! }
//!
//! let page1 = Page::new(1, (0..12).map(Row).collect());
//!
//! // Select the first 15 records, then untick one on page 1.
//! let state = SelectionState::bulk(15);
//! let visible: HashSet<u32> = (0..12).filter(|id| *id != 4).collect();
//! let state = state.apply_visible_selection(&page1, &visible);
//!
//! assert_eq!(state.selected_count(), 14);
//! assert_eq!(state.override_for(&4), Some(false));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use folio_core::logging::targets;

use crate::page::Page;
use crate::record::Record;

/// The cross-page selection model.
///
/// Values are immutable per update: every operation returns a new state and
/// leaves the receiver unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState<K: Eq + Hash> {
    bulk_baseline: usize,
    overrides: HashMap<K, bool>,
}

impl<K: Eq + Hash> Default for SelectionState<K> {
    fn default() -> Self {
        Self {
            bulk_baseline: 0,
            overrides: HashMap::new(),
        }
    }
}

impl<K> SelectionState<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection of exactly the first `count` records in source order.
    ///
    /// All overrides are discarded. Callers clamp `count` to the dataset
    /// size before calling.
    pub fn bulk(count: usize) -> Self {
        tracing::debug!(target: targets::SELECTION, count, "bulk selection");
        Self {
            bulk_baseline: count,
            overrides: HashMap::new(),
        }
    }

    /// Number of leading records implicitly selected.
    pub fn bulk_baseline(&self) -> usize {
        self.bulk_baseline
    }

    /// The explicit per-record deviations from the baseline.
    pub fn overrides(&self) -> &HashMap<K, bool> {
        &self.overrides
    }

    /// The explicit status of `id`, if it deviates from the baseline.
    pub fn override_for(&self, id: &K) -> Option<bool> {
        self.overrides.get(id).copied()
    }

    /// Records explicitly selected beyond the baseline.
    pub fn explicit_selections(&self) -> usize {
        self.overrides.values().filter(|selected| **selected).count()
    }

    /// Records inside the baseline explicitly deselected.
    pub fn explicit_deselections(&self) -> usize {
        self.overrides.values().filter(|selected| !**selected).count()
    }

    /// Whether the record at `global_index` falls inside the baseline.
    pub fn is_implicitly_selected(&self, global_index: usize) -> bool {
        global_index < self.bulk_baseline
    }

    /// Effective status of the record `id` sitting at `global_index`.
    pub fn is_selected(&self, id: &K, global_index: usize) -> bool {
        self.override_for(id)
            .unwrap_or_else(|| self.is_implicitly_selected(global_index))
    }

    /// The records of `page` that are effectively selected, in page order.
    pub fn visible_selection<'a, R>(&self, page: &'a Page<R>) -> Vec<&'a R>
    where
        R: Record<Id = K>,
    {
        page.indexed()
            .filter(|(index, record)| self.is_selected(&record.id(), *index))
            .map(|(_, record)| record)
            .collect()
    }

    /// IDs of the records of `page` that are effectively selected.
    pub fn visible_selected_ids<R>(&self, page: &Page<R>) -> HashSet<K>
    where
        R: Record<Id = K>,
    {
        page.indexed()
            .filter(|(index, record)| self.is_selected(&record.id(), *index))
            .map(|(_, record)| record.id())
            .collect()
    }

    /// Reconcile a new visible selection for `page`.
    ///
    /// `selected` is the complete set of selected IDs the table now reports
    /// for this page. IDs not on `page` are ignored. Records on other pages
    /// keep their overrides.
    #[must_use]
    pub fn apply_visible_selection<R>(&self, page: &Page<R>, selected: &HashSet<K>) -> Self
    where
        R: Record<Id = K>,
    {
        let mut overrides = self.overrides.clone();

        for (index, record) in page.indexed() {
            let id = record.id();
            let implicit = self.is_implicitly_selected(index);
            let now_selected = selected.contains(&id);

            if implicit == now_selected {
                overrides.remove(&id);
            } else {
                overrides.insert(id, now_selected);
            }
        }

        let next = Self {
            bulk_baseline: self.bulk_baseline,
            overrides,
        };
        tracing::trace!(
            target: targets::SELECTION,
            page = page.number(),
            visible_selected = selected.len(),
            overrides = next.overrides.len(),
            "reconciled visible selection"
        );
        next
    }

    /// Flip the status of the row at `position` on `page`.
    ///
    /// A position past the end of the page leaves the selection unchanged.
    #[must_use]
    pub fn toggle<R>(&self, page: &Page<R>, position: usize) -> Self
    where
        R: Record<Id = K>,
    {
        let Some(record) = page.records().get(position) else {
            tracing::debug!(target: targets::SELECTION, position, len = page.len(), "toggle outside page");
            return self.clone();
        };

        let id = record.id();
        let mut selected = self.visible_selected_ids(page);
        if !selected.remove(&id) {
            selected.insert(id);
        }
        self.apply_visible_selection(page, &selected)
    }

    /// Select every record on `page`, as the header checkbox does.
    #[must_use]
    pub fn select_visible<R>(&self, page: &Page<R>) -> Self
    where
        R: Record<Id = K>,
    {
        let all: HashSet<K> = page.records().iter().map(Record::id).collect();
        self.apply_visible_selection(page, &all)
    }

    /// Deselect every record on `page`.
    #[must_use]
    pub fn deselect_visible<R>(&self, page: &Page<R>) -> Self
    where
        R: Record<Id = K>,
    {
        self.apply_visible_selection(page, &HashSet::new())
    }

    /// Total records effectively selected across the whole dataset.
    ///
    /// Computed as the baseline plus explicit selections minus explicit
    /// deselections. Deselections only ever exist inside the baseline, so the
    /// subtraction cannot underflow for states built through this API; a
    /// state that would is reported and floored at zero.
    pub fn selected_count(&self) -> usize {
        let added = self.explicit_selections();
        let removed = self.explicit_deselections();

        match (self.bulk_baseline + added).checked_sub(removed) {
            Some(count) => count,
            None => {
                tracing::error!(
                    target: targets::SELECTION,
                    baseline = self.bulk_baseline,
                    added,
                    removed,
                    "selection count below zero; flooring"
                );
                0
            }
        }
    }

    /// Whether anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selected_count() > 0
    }
}
