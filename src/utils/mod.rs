//! Utility functions and helpers.

pub mod http;

/// Prefix a storefront-relative path with the product page base.
///
/// The path is kept verbatim: no dot-segment resolution or percent-encoding.
pub fn prefix_link(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() || path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Decode HTML entities and flatten the text onto a single line.
pub fn clean_description(raw: &str) -> String {
    html_escape::decode_html_entities(raw)
        .replace("\r\n", "\n")
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect()
}
