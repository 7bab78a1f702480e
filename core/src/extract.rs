//! Sifts address-shaped substrings back out of raw text.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// One to three digits, a period, three times over, then one to three
/// digits. Purely lexical: octets are not range-checked, so `999.999.999.999`
/// matches.
const DOTTED_QUAD: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}\b";

fn dotted_quad() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DOTTED_QUAD).expect("dotted-quad pattern compiles"))
}

/// Collects every non-overlapping dotted-quad match in `text`, deduplicated
/// and sorted by lexicographic string order, ascending.
pub fn extract(text: &str) -> Vec<String> {
    let unique: BTreeSet<&str> = dotted_quad().find_iter(text).map(|m| m.as_str()).collect();
    unique.into_iter().map(str::to_owned).collect()
}
