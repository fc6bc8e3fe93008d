//! Fixed file locations, relative to the working directory.

use std::path::{Path, PathBuf};

/// Sitemap document the pipeline reads.
pub const INPUT_PATH: &str = "sccom_sitemap_cleaned.xml";

/// Listing of product URLs.
pub const PRODUCTS_PATH: &str = "products.xml";

/// Listing of deduplicated category URLs.
pub const CATEGORIES_PATH: &str = "categories.xml";

/// The three files touched by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPaths {
    pub input: PathBuf,
    pub products: PathBuf,
    pub categories: PathBuf,
}

impl SplitPaths {
    /// Resolve the fixed file names against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input: dir.join(INPUT_PATH),
            products: dir.join(PRODUCTS_PATH),
            categories: dir.join(CATEGORIES_PATH),
        }
    }
}

impl Default for SplitPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_PATH),
            products: PathBuf::from(PRODUCTS_PATH),
            categories: PathBuf::from(CATEGORIES_PATH),
        }
    }
}
