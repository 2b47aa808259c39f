use crate::domain::storage::Storage;
use crate::domain::{Collection, ContentItem, Sitemap};
use crate::error::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a run produced, for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub games: usize,
    pub apps: usize,
    pub categories: usize,
    pub output_path: PathBuf,
}

pub struct SitemapService {
    store: Arc<dyn Storage>,
    base_url: String,
}

impl SitemapService {
    pub fn new(store: Arc<dyn Storage>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    /// Regenerates the sitemap with today's local date as `lastmod`.
    pub fn generate(&self) -> Result<GenerationReport> {
        self.generate_on(Local::now().date_naive())
    }

    /// All three indexes are loaded and the whole document is rendered
    /// before anything is written, so a bad index leaves the previous
    /// sitemap in place.
    pub fn generate_on(&self, lastmod: NaiveDate) -> Result<GenerationReport> {
        info!("Generating sitemap for {}", self.base_url);

        let mut sitemap = Sitemap::new(&self.base_url, lastmod);
        let mut counts = [0usize; 3];

        for (count, collection) in counts.iter_mut().zip(Collection::ALL) {
            let items = self.load_collection(collection)?;
            for item in &items {
                info!(
                    "{} {}: {}",
                    collection.label(),
                    item.title,
                    collection.loc(&self.base_url, &item.id)
                );
            }
            sitemap.push_collection(&self.base_url, collection, &items);
            *count = items.len();
        }

        let xml = sitemap.to_xml();
        debug!("Rendered {} sitemap entries", sitemap.urls().len());
        let output_path = self.store.save_sitemap(&xml)?;

        let [games, apps, categories] = counts;
        Ok(GenerationReport {
            games,
            apps,
            categories,
            output_path,
        })
    }

    fn load_collection(&self, collection: Collection) -> Result<Vec<ContentItem>> {
        match self.store.load_index(collection)? {
            Some(items) => Ok(items),
            None => {
                warn!(
                    "{}/index.json not found, no {} URLs will be generated",
                    collection.folder(),
                    collection.label()
                );
                Ok(Vec::new())
            }
        }
    }
}
