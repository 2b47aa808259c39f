use super::{Collection, ContentItem};
use crate::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// `Ok(None)` when the collection has no index file.
    fn load_index(&self, collection: Collection) -> Result<Option<Vec<ContentItem>>>;
    /// Replaces the sitemap and returns where it was written.
    fn save_sitemap(&self, xml: &str) -> Result<PathBuf>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const INDEX_FILE: &'static str = "index.json";
    pub const SITEMAP_FILE: &'static str = "sitemap.xml";
}
