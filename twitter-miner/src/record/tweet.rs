use serde_json::{json, Value};

use super::{ExportMapping, Record};

/// A single post
#[derive(Debug, Clone, PartialEq)]
pub struct Tweet {
    pub id: String,
    pub user_name: String,
    pub created_at: String,
    pub content: String,
    pub source: String,
    pub retweet_count: u64,
    pub favorite_count: u64,
    pub coordinates: Option<Value>,
    pub entities: Option<Value>,
}

impl Record for Tweet {
    fn export(&self) -> ExportMapping {
        ExportMapping::from([
            ("id".to_owned(), json!(self.id)),
            ("username".to_owned(), json!(self.user_name)),
            ("created_at".to_owned(), json!(self.created_at)),
            ("content".to_owned(), json!(self.content)),
            ("source".to_owned(), json!(self.source)),
            ("retweet_count".to_owned(), json!(self.retweet_count)),
            ("favorite_count".to_owned(), json!(self.favorite_count)),
            ("coordinates".to_owned(), or_empty(&self.coordinates)),
            ("entities".to_owned(), or_empty(&self.entities)),
        ])
    }
}

fn or_empty(value: &Option<Value>) -> Value {
    match value {
        Some(v) if !v.is_null() => v.clone(),
        _ => json!({}),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tweet() -> Tweet {
        Tweet {
            id: "999".to_owned(),
            user_name: "Test".to_owned(),
            created_at: "Jan 01, 2024 00:00:00 UTC+0000".to_owned(),
            content: "hello".to_owned(),
            source: "web".to_owned(),
            retweet_count: 0,
            favorite_count: 1,
            coordinates: None,
            entities: None,
        }
    }

    #[test]
    fn absent_structures_export_empty() {
        let mapping = tweet().export();
        assert_eq!(json!({}), mapping["coordinates"]);
        assert_eq!(json!({}), mapping["entities"]);
    }

    #[test]
    fn explicit_null_exports_empty() {
        let mut tweet = tweet();
        tweet.coordinates = Some(Value::Null);
        assert_eq!(json!({}), tweet.export()["coordinates"]);
        assert_eq!(Some(Value::Null), tweet.coordinates);
    }

    #[test]
    fn present_structures_pass_through() {
        let coordinates = json!({"type": "Point", "coordinates": [-75.14, 40.05]});
        let entities = json!({"hashtags": [{"text": "rust", "indices": [0, 5]}]});

        let mut tweet = tweet();
        tweet.coordinates = Some(coordinates.clone());
        tweet.entities = Some(entities.clone());

        let mapping = tweet.export();
        assert_eq!(coordinates, mapping["coordinates"]);
        assert_eq!(entities, mapping["entities"]);
    }

    #[test]
    fn export_keys() {
        let mapping = tweet().export();
        let keys: Vec<_> = mapping.keys().map(String::as_str).collect();
        assert_eq!(
            vec![
                "id",
                "username",
                "created_at",
                "content",
                "source",
                "retweet_count",
                "favorite_count",
                "coordinates",
                "entities"
            ],
            keys
        );
        assert_eq!(json!("999"), mapping["id"]);
    }
}
