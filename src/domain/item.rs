use serde::Deserialize;

/// One entry of an `index.json` file. Any other fields the site keeps on an
/// entry are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_extra_fields() {
        let items: Vec<ContentItem> = serde_json::from_str(
            r#"[{"id":"retro-1","title":"Pixel Pong","image":"cover.png","tags":["arcade"]}]"#,
        )
        .unwrap();

        assert_eq!(
            items,
            vec![ContentItem {
                id: "retro-1".to_string(),
                title: "Pixel Pong".to_string(),
            }]
        );
    }

    #[test]
    fn test_requires_title() {
        let result: Result<Vec<ContentItem>, _> = serde_json::from_str(r#"[{"id":"retro-1"}]"#);
        assert!(result.is_err());
    }
}
