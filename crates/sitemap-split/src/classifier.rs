//! Classify sitemap entries into product and category URLs.
//!
//! Only `https://www.sccom.cz/` locations are considered. A location is a
//! product when its path ends in `-d<digits>` and a category when it ends in
//! `-k<digits>`, optionally followed by a query string. The two rules are
//! applied independently over the whole document.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static PRODUCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<url>\s*<loc>(https://www\.sccom\.cz/[^<]*-d\d+)</loc>\s*</url>").unwrap()
});

// The query string stops at `<` and at a line break, so a location with
// either inside its query never matches.
static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<url>\s*<loc>(https://www\.sccom\.cz/[^<]*-k\d+(?:\?[^<\n]*)?)</loc>\s*</url>")
        .unwrap()
});

/// Raw classification result, in document order with duplicates retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub products: Vec<String>,
    pub categories: Vec<String>,
}

/// Scan `document` for product and category entry blocks.
pub fn classify(document: &str) -> Classified {
    let classified = Classified {
        products: capture_locations(&PRODUCT_RE, document),
        categories: capture_locations(&CATEGORY_RE, document),
    };
    debug!(
        products = classified.products.len(),
        categories = classified.categories.len(),
        "classified sitemap entries"
    );
    classified
}

fn capture_locations(re: &Regex, document: &str) -> Vec<String> {
    re.captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
