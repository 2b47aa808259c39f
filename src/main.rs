use crate::config::{Config, BASE_URL};
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use crate::services::sitemap::SitemapService;
use std::sync::Arc;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

fn main() -> Result<()> {
    let config = Config::new()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let store = Arc::new(FileSystemStore::new(&config.args.root));
    let report = SitemapService::new(store, BASE_URL).generate()?;

    info!("Generated {} game URLs", report.games);
    info!("Generated {} app URLs", report.apps);
    info!("Generated {} category URLs", report.categories);
    info!("Sitemap saved to: {}", report.output_path.display());
    Ok(())
}
