//! Collapse category URLs to their clean, query-free form.

use std::collections::HashSet;

/// Strip everything from the first `?` onward.
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(clean, _)| clean)
}

/// Clean each URL and keep the first occurrence of every clean string.
///
/// Output order is the order in which each distinct clean string first
/// appears, whichever raw variant produced it.
pub fn dedup_clean<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut clean = Vec::new();
    for url in urls {
        let stripped = strip_query(url.as_ref());
        if seen.insert(stripped) {
            clean.push(stripped.to_string());
        }
    }
    clean
}
