//! Read the sitemap document from disk.

use crate::error::{Result, SplitError};
use std::path::Path;
use tracing::info;

/// Read the whole sitemap at `path` as UTF-8 text.
///
/// A missing, unreadable or non-UTF-8 file is fatal.
pub fn load_document(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|source| SplitError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded sitemap {} ({} bytes)", path.display(), content.len());
    Ok(content)
}
