// * The Refinery (Extraction Pipeline)
// * Goal: turn the trending page markup into a ranked table of repositories.

pub mod counts;
pub mod record;
pub mod table;

// * Re-exports for convenient access
pub use counts::parse_count;
pub use record::{Record, RecordExtractor};
pub use table::{Dataset, TableBuilder};

use crate::config::constants::ITEM_PATTERN;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static SELECTOR_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(ITEM_PATTERN).expect("Invalid item selector"));

/// Item subtrees of a parsed page, in document order
pub fn select_items(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&SELECTOR_ITEM).collect()
}

/// Parses a page body and builds the unranked dataset
///
/// # Example
/// ```ignore
/// use trending_scout::refinery;
///
/// let dataset = refinery::extract_dataset(&body).rank();
/// println!("Repositories found: {}", dataset.len());
/// ```
pub fn extract_dataset(html: &str) -> Dataset {
    let document = Html::parse_document(html);
    TableBuilder::build(select_items(&document))
}
