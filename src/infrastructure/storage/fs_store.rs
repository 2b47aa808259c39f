use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::{Collection, ContentItem};
use crate::error::{Result, SitemapError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads index files from, and writes the sitemap into, a project root.
pub struct FileSystemStore {
    root: PathBuf,
}

impl FileSystemStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn index_path(&self, collection: Collection) -> PathBuf {
        self.root
            .join(collection.folder())
            .join(StorageKeys::INDEX_FILE)
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.root.join(StorageKeys::SITEMAP_FILE)
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SitemapError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| SitemapError::from_json(path.to_path_buf(), e))
    }
}

impl Storage for FileSystemStore {
    fn load_index(&self, collection: Collection) -> Result<Option<Vec<ContentItem>>> {
        self.read_json_file(&self.index_path(collection))
    }

    fn save_sitemap(&self, xml: &str) -> Result<PathBuf> {
        let path = self.sitemap_path();
        fs::write(&path, xml).map_err(|source| SitemapError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
