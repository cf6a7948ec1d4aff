//! Pages of records and the index arithmetic shared by the paginator and
//! the selection model.
//!
//! Pages are numbered from 1. A record at zero-based position `i` on page `p`
//! has the *global index* `(p - 1) * page_size + i`, which is its rank in the
//! source's total order. Bulk selection is expressed in global indices.

use std::fmt;

use crate::record::Record;

/// Number of records per page used by the artworks endpoint.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One page of records as returned by a data source.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<R> {
    number: usize,
    page_size: usize,
    records: Vec<R>,
}

impl<R> Page<R> {
    /// Create page `number` with the default page size.
    pub fn new(number: usize, records: Vec<R>) -> Self {
        Self::with_page_size(number, DEFAULT_PAGE_SIZE, records)
    }

    /// Create page `number` with an explicit page size.
    ///
    /// `number` is 1-based; a 0 is treated as page 1.
    pub fn with_page_size(number: usize, page_size: usize, records: Vec<R>) -> Self {
        debug_assert!(
            records.len() <= page_size,
            "page holds {} records but page size is {page_size}",
            records.len()
        );
        Self {
            number: number.max(1),
            page_size,
            records,
        }
    }

    /// Create an empty page.
    pub fn empty(number: usize) -> Self {
        Self::new(number, Vec::new())
    }

    /// The 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The nominal page size used for global index arithmetic.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The records on this page, in source order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Global index of the first row on this page.
    pub fn first_index(&self) -> usize {
        first_row_offset(self.number, self.page_size)
    }

    /// Global index of the row at `position` on this page.
    ///
    /// Saturates at `usize::MAX` rather than wrapping.
    pub fn global_index(&self, position: usize) -> usize {
        self.first_index().saturating_add(position)
    }

    /// Iterate records paired with their global indices.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &R)> {
        let first = self.first_index();
        self.records
            .iter()
            .enumerate()
            .map(move |(position, record)| (first.saturating_add(position), record))
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R: Record> Page<R> {
    /// IDs of the records on this page, in order.
    pub fn ids(&self) -> Vec<R::Id> {
        self.records.iter().map(Record::id).collect()
    }

    /// Position of the record with `id`, if it is on this page.
    pub fn position_of(&self, id: &R::Id) -> Option<usize> {
        self.records.iter().position(|r| &r.id() == id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.position_of(id).is_some()
    }
}

/// Number of pages needed to show `total` records.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Global index of the first row on `page` (1-based).
///
/// This is the paginator's `first` offset. Saturates instead of wrapping;
/// use [`page_fits`] to reject such pages up front.
pub fn first_row_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Whether every global index on `page` fits in a `usize`.
pub fn page_fits(page: usize, page_size: usize) -> bool {
    page.checked_mul(page_size).is_some()
}

/// Convert a paginator's zero-based page event into a 1-based page number.
///
/// `None` if the event is `usize::MAX`.
pub fn page_from_event(zero_based: usize) -> Option<usize> {
    zero_based.checked_add(1)
}

/// The "Showing X to Y of Z entries" line under the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageReport {
    /// 1-based rank of the first row shown, or 0 when the dataset is empty.
    pub first: usize,
    /// 1-based rank of the last row shown, or 0 when the dataset is empty.
    pub last: usize,
    /// Total records in the dataset.
    pub total: usize,
}

impl PageReport {
    /// Build the report for `page` of a dataset of `total` records.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        if total == 0 {
            return Self::default();
        }
        let offset = first_row_offset(page, page_size);
        Self {
            first: offset.saturating_add(1).min(total),
            last: offset.saturating_add(page_size).min(total),
            total,
        }
    }
}

impl fmt::Display for PageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.first, self.last, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(u32);

    impl Record for Row {
        type Id = u32;
        fn id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_global_index() {
        let page = Page::new(3, (0..12).map(Row).collect());
        assert_eq!(page.first_index(), 24);
        assert_eq!(page.global_index(0), 24);
        assert_eq!(page.global_index(11), 35);

        let indices: Vec<usize> = page.indexed().map(|(i, _)| i).collect();
        assert_eq!(indices.first(), Some(&24));
        assert_eq!(indices.last(), Some(&35));
    }

    #[test]
    fn test_short_last_page() {
        let page = Page::new(3, (24..30).map(Row).collect());
        assert_eq!(page.len(), 6);
        assert_eq!(page.global_index(5), 29);
        assert_eq!(page.position_of(&27), Some(3));
        assert!(!page.contains(&31));
    }

    #[test]
    fn test_page_zero_is_page_one() {
        let page: Page<Row> = Page::empty(0);
        assert_eq!(page.number(), 1);
        assert_eq!(page.first_index(), 0);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 12), 0);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(13, 12), 2);
        assert_eq!(page_count(129_000, 12), 10_750);
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn test_paginator_offsets() {
        assert_eq!(first_row_offset(1, 12), 0);
        assert_eq!(first_row_offset(4, 12), 36);
        assert_eq!(page_from_event(0), Some(1));
        assert_eq!(page_from_event(3), Some(4));
    }

    #[test]
    fn test_huge_page_numbers_saturate() {
        assert_eq!(page_from_event(usize::MAX), None);
        assert_eq!(first_row_offset(usize::MAX / 2, 12), usize::MAX);
        assert!(!page_fits(usize::MAX / 2, 12));
        assert!(page_fits(usize::MAX / 12, 12));

        let page = Page::new(usize::MAX / 2, vec![Row(1)]);
        assert_eq!(page.global_index(0), usize::MAX);
        assert_eq!(
            PageReport::new(usize::MAX / 2, 12, 30).to_string(),
            "Showing 30 to 30 of 30 entries"
        );
    }

    #[test]
    fn test_page_report() {
        assert_eq!(
            PageReport::new(1, 12, 30).to_string(),
            "Showing 1 to 12 of 30 entries"
        );
        assert_eq!(
            PageReport::new(3, 12, 30).to_string(),
            "Showing 25 to 30 of 30 entries"
        );
        assert_eq!(
            PageReport::new(1, 12, 0).to_string(),
            "Showing 0 to 0 of 0 entries"
        );
    }
}
