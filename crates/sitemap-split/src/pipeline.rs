//! End-to-end split: load, classify, dedup, write.

use crate::classifier::classify;
use crate::config::SplitPaths;
use crate::dedup::dedup_clean;
use crate::error::Result;
use crate::loader::load_document;
use crate::report::SplitReport;
use crate::writer::write_urlset;
use tracing::info;

/// Product list and clean category list derived from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapSplit {
    /// Product URLs in document order. Not deduplicated.
    pub products: Vec<String>,
    /// Query-free category URLs, unique, in first-appearance order.
    pub categories: Vec<String>,
}

impl SitemapSplit {
    pub fn report(&self) -> SplitReport {
        SplitReport {
            products: self.products.len(),
            categories: self.categories.len(),
        }
    }
}

/// Pure transformation from sitemap text to the two output lists.
pub fn split_sitemap(document: &str) -> SitemapSplit {
    let classified = classify(document);
    SitemapSplit {
        categories: dedup_clean(&classified.categories),
        products: classified.products,
    }
}

/// Read `paths.input`, write both listings and return the counts.
///
/// The first I/O failure aborts the run.
pub fn run(paths: &SplitPaths) -> Result<SplitReport> {
    let document = load_document(&paths.input)?;
    let split = split_sitemap(&document);
    drop(document);

    write_urlset(&paths.products, &split.products)?;
    write_urlset(&paths.categories, &split.categories)?;

    let report = split.report();
    info!(
        products = report.products,
        categories = report.categories,
        "sitemap split complete"
    );
    Ok(report)
}
