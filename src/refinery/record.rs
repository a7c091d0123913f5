// * Record Extractor
// * Maps one `article.Box-row` subtree to a fully populated Record.
// * Every missing field degrades to its sentinel; extraction never aborts.

use crate::config::constants::{
    CATEGORY_SENTINEL, COUNT_SENTINEL, LANGUAGE_PATTERN, MUTED_LINK_PATTERN, NAME_PATTERN,
    NAME_SENTINEL,
};
use crate::refinery::counts::parse_count;
use scraper::{ElementRef, Selector};
use serde::Serialize;
use std::sync::LazyLock;

// * Precompiled CSS selectors
static SELECTOR_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NAME_PATTERN).expect("Invalid name selector"));
static SELECTOR_LANGUAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(LANGUAGE_PATTERN).expect("Invalid language selector"));
static SELECTOR_MUTED_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(MUTED_LINK_PATTERN).expect("Invalid muted link selector"));

// * Counters carry no semantic label on the page: the first muted link is the
// * star count and the second the fork count. A page that reorders these links
// * silently swaps the two columns.
pub const PRIMARY_COUNT_INDEX: usize = 0;
pub const SECONDARY_COUNT_INDEX: usize = 1;

/// One ranked item. Every field always holds a value or its sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// `owner/name` with all spaces and newlines removed, or `"N/A"`
    #[serde(rename = "Repository")]
    pub name: String,
    /// Programming language, or `"Unknown"`
    #[serde(rename = "Language")]
    pub category: String,
    /// Primary counter (stars), `0` when missing
    #[serde(rename = "Stars")]
    pub stars: u64,
    /// Secondary counter (forks), `0` when missing
    #[serde(rename = "Forks")]
    pub forks: u64,
}

impl Record {
    pub fn new(name: impl Into<String>, category: impl Into<String>, stars: u64, forks: u64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            stars,
            forks,
        }
    }
}

pub struct RecordExtractor;

impl RecordExtractor {
    /// Extracts a record from one item subtree
    pub fn extract(item: &ElementRef) -> Record {
        let counters: Vec<ElementRef> = item.select(&SELECTOR_MUTED_LINK).collect();

        Record {
            name: Self::extract_name(item).unwrap_or_else(|| NAME_SENTINEL.to_string()),
            category: Self::extract_category(item)
                .unwrap_or_else(|| CATEGORY_SENTINEL.to_string()),
            stars: Self::count_at(&counters, PRIMARY_COUNT_INDEX).unwrap_or(COUNT_SENTINEL),
            forks: Self::count_at(&counters, SECONDARY_COUNT_INDEX).unwrap_or(COUNT_SENTINEL),
        }
    }

    // * "owner /\n   repo" -> "owner/repo"
    fn extract_name(item: &ElementRef) -> Option<String> {
        let link = item.select(&SELECTOR_NAME).next()?;
        let text = element_text(&link);
        Some(text.trim().replace(['\n', ' '], ""))
    }

    fn extract_category(item: &ElementRef) -> Option<String> {
        let span = item.select(&SELECTOR_LANGUAGE).next()?;
        Some(element_text(&span).trim().to_string())
    }

    // * None only when the candidate is absent; unparseable text still yields a number
    fn count_at(counters: &[ElementRef], index: usize) -> Option<u64> {
        counters
            .get(index)
            .map(|link| parse_count(element_text(link).trim()))
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extract_first(html: &str) -> Record {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("article").unwrap();
        let article = fragment.select(&selector).next().unwrap();
        RecordExtractor::extract(&article)
    }

    #[test]
    fn test_full_item() {
        let record = extract_first(
            r#"
            <article class="Box-row">
                <h2 class="h3 lh-condensed">
                    <a href="/rust-lang/rust">
                        <span class="text-normal">rust-lang /</span>
                        rust
                    </a>
                </h2>
                <div class="f6 color-fg-muted mt-2">
                    <span itemprop="programmingLanguage"> Rust </span>
                    <a class="Link--muted d-inline-block mr-3" href="/rust-lang/rust/stargazers">
                        <svg></svg>
                        98,123
                    </a>
                    <a class="Link--muted d-inline-block mr-3" href="/rust-lang/rust/forks">
                        12,700
                    </a>
                </div>
            </article>
            "#,
        );

        assert_eq!(record, Record::new("rust-lang/rust", "Rust", 98123, 12700));
    }

    #[test]
    fn test_missing_heading_uses_sentinel() {
        let record = extract_first(
            r#"<article><span itemprop="programmingLanguage">Go</span></article>"#,
        );
        assert_eq!(record.name, "N/A");
        assert_eq!(record.category, "Go");
    }

    #[test]
    fn test_heading_without_link_uses_sentinel() {
        let record = extract_first(r#"<article><h2>plain heading</h2></article>"#);
        assert_eq!(record.name, "N/A");
    }

    #[test]
    fn test_missing_language_uses_sentinel() {
        let record = extract_first(r#"<article><h2><a href="/a/b">a / b</a></h2></article>"#);
        assert_eq!(record.name, "a/b");
        assert_eq!(record.category, "Unknown");
    }

    #[test]
    fn test_no_counters() {
        let record = extract_first(r#"<article><h2><a>x</a></h2></article>"#);
        assert_eq!(record.stars, 0);
        assert_eq!(record.forks, 0);
    }

    #[test]
    fn test_single_counter_is_primary() {
        let record = extract_first(r#"<article><a class="Link--muted">1,500</a></article>"#);
        assert_eq!(record.stars, 1500);
        assert_eq!(record.forks, 0);
    }

    #[test]
    fn test_counters_follow_document_order() {
        // * Positional rule: whatever comes first is treated as stars
        let record = extract_first(
            r#"<article>
                <a class="Link--muted" href="/x/forks">7</a>
                <a class="Link--muted" href="/x/stargazers">300</a>
                <a class="Link--muted" href="/x/other">9</a>
            </article>"#,
        );
        assert_eq!(record.stars, 7);
        assert_eq!(record.forks, 300);
    }

    #[test]
    fn test_unparseable_counter_is_zero() {
        let record = extract_first(
            r#"<article><a class="Link--muted">Built by</a><a class="Link--muted">42</a></article>"#,
        );
        assert_eq!(record.stars, 0);
        assert_eq!(record.forks, 42);
    }

    #[test]
    fn test_first_heading_link_wins() {
        let record = extract_first(
            r#"<article><h2><a>first / one</a></h2><h2><a>second</a></h2></article>"#,
        );
        assert_eq!(record.name, "first/one");
    }
}
