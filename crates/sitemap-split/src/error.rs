//! Error types for the sitemap split pipeline.

use std::path::PathBuf;

/// Fatal failures. Every variant wraps the underlying I/O error.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("failed to read sitemap {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write listing {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SplitError>;
