use super::ChangeFreq;

/// The three kinds of content the site publishes, in sitemap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Games,
    Apps,
    Categories,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Games, Collection::Apps, Collection::Categories];

    /// Folder under the project root holding this collection's `index.json`.
    pub fn folder(self) -> &'static str {
        match self {
            Collection::Games => "g",
            Collection::Apps => "a",
            Collection::Categories => "c",
        }
    }

    /// Query parameter the site router reads the id from.
    pub fn query_key(self) -> &'static str {
        match self {
            Collection::Games | Collection::Apps => "u",
            Collection::Categories => "c",
        }
    }

    pub fn priority(self) -> &'static str {
        match self {
            Collection::Games | Collection::Apps => "0.8",
            Collection::Categories => "0.6",
        }
    }

    pub fn changefreq(self) -> ChangeFreq {
        ChangeFreq::Weekly
    }

    pub fn label(self) -> &'static str {
        match self {
            Collection::Games => "game",
            Collection::Apps => "app",
            Collection::Categories => "category",
        }
    }

    pub fn loc(self, base_url: &str, id: &str) -> String {
        format!("{}/?{}={}", base_url, self.query_key(), id)
    }
}
