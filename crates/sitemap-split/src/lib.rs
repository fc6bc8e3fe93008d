//! Split an sccom.cz sitemap into product and category URL listings.
//!
//! The crate reads one sitemap document, picks out `<url><loc>..</loc></url>`
//! blocks whose location looks like a product (`-d<digits>`) or a category
//! (`-k<digits>`, optionally with a query string), collapses category query
//! variants to their clean form, and writes both lists as minimal `<urlset>`
//! files.
//!
//! [`pipeline::split_sitemap`] is the pure text-to-lists transformation;
//! [`pipeline::run`] wraps it with file I/O.

pub mod classifier;
pub mod config;
pub mod dedup;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod writer;

pub use config::SplitPaths;
pub use error::{Result, SplitError};
pub use pipeline::{run, split_sitemap, SitemapSplit};
pub use report::SplitReport;
