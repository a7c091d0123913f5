// * Count Parser
// * Turns a free-text counter label ("1,234", "\n 45 \n", "12.3k") into an integer.

use crate::config::constants::COUNT_SENTINEL;
use regex::Regex;
use std::sync::LazyLock;

// * Everything that is not an ASCII decimal digit
static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("Invalid non-digit regex"));

/// Strips every non-digit character and parses what is left as base 10.
///
/// Total over all inputs: no digits (including the empty string) gives `0`,
/// and so does a digit run too long for `u64`. Separators and unit suffixes
/// are dropped, not interpreted, so `"12.3k"` reads as `123`.
pub fn parse_count(text: &str) -> u64 {
    let digits = NON_DIGITS.replace_all(text, "");
    if digits.is_empty() {
        return COUNT_SENTINEL;
    }
    digits.parse().unwrap_or(COUNT_SENTINEL)
}
