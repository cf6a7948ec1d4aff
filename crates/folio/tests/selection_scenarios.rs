//! End-to-end selection scenarios over an in-memory dataset.

use std::collections::HashSet;

use folio::{Artwork, MemorySource, PageController, SelectionState};

/// `n` artworks with IDs `1..=n`, so ID = global index + 1.
fn artworks(n: u64) -> Vec<Artwork> {
    (1..=n).map(|id| Artwork::new(id, format!("Artwork {id}"))).collect()
}

fn controller(n: u64) -> PageController<MemorySource<Artwork>> {
    PageController::new(MemorySource::new(artworks(n)))
}

fn visible_ids(controller: &PageController<MemorySource<Artwork>>) -> Vec<u64> {
    controller.visible_selection().iter().map(|a| a.id).collect()
}

fn shown_with(controller: &PageController<MemorySource<Artwork>>, id: u64, selected: bool) -> HashSet<u64> {
    let mut shown: HashSet<u64> = visible_ids(controller).into_iter().collect();
    if selected {
        shown.insert(id);
    } else {
        shown.remove(&id);
    }
    shown
}

#[tokio::test]
async fn test_select_two_rows_from_empty() {
    let mut c = controller(100);
    c.load_page(1).await.unwrap();
    assert_eq!(c.records().len(), 12);

    c.on_selection_change(&[2, 5].into_iter().collect());

    assert_eq!(c.selected_count(), 2);
    assert_eq!(c.selection().bulk_baseline(), 0);
    assert_eq!(c.selection().overrides().len(), 2);
    assert_eq!(c.selection().override_for(&2), Some(true));
    assert_eq!(c.selection().override_for(&5), Some(true));
    assert_eq!(visible_ids(&c), vec![2, 5]);
}

#[tokio::test]
async fn test_bulk_selection_across_pages() {
    let mut c = controller(100);
    c.load_page(1).await.unwrap();
    assert_eq!(c.submit_bulk_selection(Some(25)), Some(25));

    assert_eq!(visible_ids(&c), (1..=12).collect::<Vec<_>>());

    c.load_page(3).await.unwrap();
    // Global index 24 is ID 25.
    assert_eq!(visible_ids(&c), vec![25]);
    assert_eq!(c.selected_count(), 25);
}

#[tokio::test]
async fn test_deselect_then_reselect_inside_baseline() {
    let mut c = controller(100);
    c.load_page(1).await.unwrap();
    c.submit_bulk_selection(Some(25));

    // Global index 3 is ID 4.
    let shown = shown_with(&c, 4, false);
    c.on_selection_change(&shown);
    assert_eq!(c.selection().override_for(&4), Some(false));
    assert_eq!(c.selection().overrides().len(), 1);
    assert_eq!(c.selected_count(), 24);

    let shown = shown_with(&c, 4, true);
    c.on_selection_change(&shown);
    assert!(c.selection().overrides().is_empty());
    assert_eq!(c.selected_count(), 25);
    assert_eq!(c.selection(), &SelectionState::bulk(25));
}

#[tokio::test]
async fn test_selection_survives_navigation() {
    let mut c = controller(100);
    c.load_page(1).await.unwrap();
    c.submit_bulk_selection(Some(25));

    c.load_page(5).await.unwrap();
    assert!(visible_ids(&c).is_empty());

    // Global index 50 is ID 51.
    let shown = shown_with(&c, 51, true);
    c.on_selection_change(&shown);
    assert_eq!(c.selection().override_for(&51), Some(true));
    assert_eq!(c.selected_count(), 26);

    c.load_page(2).await.unwrap();
    assert_eq!(visible_ids(&c), (13..=24).collect::<Vec<_>>());

    c.load_page(5).await.unwrap();
    assert_eq!(visible_ids(&c), vec![51]);
    assert_eq!(c.selected_count(), 26);
}

#[tokio::test]
async fn test_rederiving_unchanged_selection_is_stable() {
    let mut c = controller(100);
    c.load_page(2).await.unwrap();
    c.submit_bulk_selection(Some(18));
    c.toggle_row(1);
    c.toggle_row(9);

    let before = c.selection().clone();
    let shown: HashSet<u64> = visible_ids(&c).into_iter().collect();
    c.on_selection_change(&shown);
    let records: Vec<Artwork> = c.visible_selection().into_iter().cloned().collect();
    c.on_selected_records(&records);

    assert_eq!(c.selection(), &before);
}

#[tokio::test]
async fn test_bulk_replaces_manual_edits() {
    let mut c = controller(100);
    c.load_page(1).await.unwrap();
    c.toggle_row(0);
    c.toggle_row(4);
    c.load_page(7).await.unwrap();
    c.select_visible();
    assert_eq!(c.selected_count(), 14);

    c.submit_bulk_selection(Some(40));
    assert!(c.selection().overrides().is_empty());
    assert_eq!(c.selected_count(), 40);

    // Page 4 holds IDs 37..=48.
    c.load_page(4).await.unwrap();
    assert_eq!(visible_ids(&c), vec![37, 38, 39, 40]);
}

#[tokio::test]
async fn test_short_last_page() {
    let mut c = controller(100);
    c.load_page(9).await.unwrap();
    assert_eq!(c.records().len(), 4);
    assert_eq!(c.page_report().to_string(), "Showing 97 to 100 of 100 entries");

    c.submit_bulk_selection(Some(100));
    assert_eq!(visible_ids(&c), vec![97, 98, 99, 100]);

    c.deselect_visible();
    assert_eq!(c.selected_count(), 96);
}

#[tokio::test]
async fn test_count_matches_enumeration_after_mixed_edits() {
    let mut c = controller(60);
    c.load_page(1).await.unwrap();
    c.submit_bulk_selection(Some(20));
    c.toggle_row(3);
    c.load_page(2).await.unwrap();
    c.select_visible();
    c.toggle_row(11);
    c.load_page(4).await.unwrap();
    c.toggle_row(2);
    c.toggle_row(5);
    c.load_page(1).await.unwrap();
    c.toggle_row(3);
    c.toggle_row(0);

    let state = c.selection().clone();
    let source = MemorySource::new(artworks(60));
    let mut enumerated = 0;
    for number in 1..=5 {
        let page = folio::Page::new(number, source.page(number).unwrap().records);
        enumerated += state.visible_selection(&page).len();
    }

    assert_eq!(c.selected_count(), enumerated);
    // Baseline 20, ID 1 removed, indices 20..=22 and two rows on page 4 added.
    assert_eq!(enumerated, 20 - 1 + 3 + 2);
}
