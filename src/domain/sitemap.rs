//! The sitemap document and its XML form.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://trylearning.space</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use super::{Collection, ContentItem};
use chrono::NaiveDate;
use quick_xml::escape::escape;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    pub changefreq: ChangeFreq,
    pub priority: &'static str,
}

/// Entries in output order. `lastmod` is the run date and is shared by every
/// entry.
#[derive(Debug, Clone)]
pub struct Sitemap {
    lastmod: NaiveDate,
    urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Starts a sitemap whose first entry is the site root.
    pub fn new(base_url: &str, lastmod: NaiveDate) -> Self {
        Self {
            lastmod,
            urls: vec![UrlEntry {
                loc: base_url.to_string(),
                changefreq: ChangeFreq::Daily,
                priority: "1.0",
            }],
        }
    }

    /// Appends one entry per item, keeping the order of `items`.
    pub fn push_collection(&mut self, base_url: &str, collection: Collection, items: &[ContentItem]) {
        self.urls.extend(items.iter().map(|item| UrlEntry {
            loc: collection.loc(base_url, &item.id),
            changefreq: collection.changefreq(),
            priority: collection.priority(),
        }));
    }

    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn to_xml(&self) -> String {
        let lastmod = self.lastmod.format("%Y-%m-%d").to_string();
        let mut xml = String::with_capacity(128 + self.urls.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape(entry.loc.as_str()));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&lastmod);
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(entry.priority);
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
