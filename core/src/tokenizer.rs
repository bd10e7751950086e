use crate::html::extract_text;
use std::collections::HashSet;

/// Lowercase and split on whitespace. A term shows up once no matter how often it occurs.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Distinct terms of an HTML page's visible text.
pub fn page_terms(html: &str) -> HashSet<String> {
    tokenize(&extract_text(html))
}
