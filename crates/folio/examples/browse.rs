//! Folio Browse Example
//!
//! Loads pages of the public art-institute artworks collection, applies a
//! bulk selection, edits it by hand and prints each page as a table.
//!
//! Run with: cargo run -p folio --example browse -- [BULK_COUNT] [CONFIG.toml]
//!
//! Set `RUST_LOG=folio=debug` to watch page loads and selection changes.

use std::collections::HashSet;

use folio::{
    Artwork, ArtworkColumn, ArtworkSource, BulkCountInput, PageController, SourceConfig,
};
use tracing_subscriber::EnvFilter;

fn print_page(controller: &PageController<ArtworkSource>) {
    let selected: HashSet<u64> = controller.visible_selection().iter().map(|a| a.id).collect();

    let headers: Vec<String> = ArtworkColumn::ALL
        .iter()
        .map(|c| format!("{:<22}", c.header()))
        .collect();
    println!("    {}", headers.join(""));

    for artwork in controller.records() {
        let mark = if selected.contains(&artwork.id) { "[x]" } else { "[ ]" };
        println!("{mark} {}", row(artwork));
    }

    println!("{}", controller.page_report());
    if let Some(label) = controller.selection_label() {
        println!("{label}");
    }
    println!();
}

fn row(artwork: &Artwork) -> String {
    ArtworkColumn::ALL
        .iter()
        .map(|c| {
            let text = c.cell_text(artwork).replace('\n', " ");
            let clipped: String = text.chars().take(20).collect();
            format!("{clipped:<22}")
        })
        .collect()
}

#[tokio::main]
async fn main() -> folio::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let bulk = BulkCountInput::parse(&args.next().unwrap_or_else(|| "15".to_string()))?;
    let config = match args.next() {
        Some(path) => SourceConfig::load(path)?,
        None => SourceConfig::default(),
    };

    let mut controller = PageController::new(ArtworkSource::new(config)?);
    controller.fetch_failed.connect(|message| eprintln!("page load failed: {message}"));
    controller.selection_changed.connect(|count| tracing::info!(count, "selection changed"));

    controller.load_page(1).await?;
    controller.submit_bulk_selection(bulk.submission(controller.total_records()));
    print_page(&controller);

    // Untick the second row and tick the last one of page 2.
    controller.load_page(2).await?;
    controller.toggle_row(1);
    if let Some(last) = controller.records().len().checked_sub(1) {
        controller.toggle_row(last);
    }
    print_page(&controller);

    // Leave and come back: the edits on page 2 are still there.
    controller.load_page(3).await?;
    controller.load_page(2).await?;
    print_page(&controller);

    Ok(())
}
