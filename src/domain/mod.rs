mod collection;
mod item;
mod sitemap;
pub(crate) mod storage;

pub use collection::Collection;
pub use item::ContentItem;
pub use sitemap::{ChangeFreq, Sitemap};
