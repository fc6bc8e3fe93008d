//! `sitemap-split` — split `sccom_sitemap_cleaned.xml` into
//! `products.xml` and `categories.xml` in the current directory.

use anyhow::Result;
use clap::Parser;
use sitemap_split::SplitPaths;
use tracing::info;

#[derive(Parser)]
#[command(name = "sitemap-split", version, about)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sitemap_split=info".parse()?),
        )
        .init();

    info!("starting sitemap-split v{}", env!("CARGO_PKG_VERSION"));

    let paths = SplitPaths::default();
    let report = sitemap_split::run(&paths)?;
    println!("{report}");

    Ok(())
}
