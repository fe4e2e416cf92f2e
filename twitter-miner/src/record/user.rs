use serde_json::{json, Value};
use twitter::RawUser;

use super::{ExportMapping, Record};

/// A Twitter account
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
    pub location: Option<String>,
    pub total_followers: u64,
    pub total_friends: u64,
    pub total_posts: u64,
    tweets: Option<Vec<ExportMapping>>,
}

impl User {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        url: Option<String>,
        location: Option<String>,
        total_followers: u64,
        total_friends: u64,
        total_posts: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            url,
            location,
            total_followers,
            total_friends,
            total_posts,
            tweets: None,
        }
    }

    /// Exported tweets, `None` until [`User::set_posts`] is called
    pub fn tweets(&self) -> Option<&[ExportMapping]> {
        self.tweets.as_deref()
    }

    /// Attach exported tweets, replacing any attached before
    pub fn set_posts(&mut self, tweets: Vec<ExportMapping>) {
        self.tweets = Some(tweets);
    }
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        Self::new(
            raw.id,
            raw.name,
            raw.url,
            raw.location,
            raw.followers_count,
            raw.friends_count,
            raw.statuses_count,
        )
    }
}

impl Record for User {
    fn export(&self) -> ExportMapping {
        let tweets = match &self.tweets {
            Some(tweets) => json!(tweets),
            None => Value::Null,
        };

        ExportMapping::from([
            ("id".to_owned(), json!(self.id)),
            ("name".to_owned(), json!(self.name)),
            ("url".to_owned(), json!(self.url)),
            ("location".to_owned(), json!(self.location)),
            ("total_followers".to_owned(), json!(self.total_followers)),
            ("total_friends".to_owned(), json!(self.total_friends)),
            ("total_posts".to_owned(), json!(self.total_posts)),
            ("tweets".to_owned(), tweets),
        ])
    }
}
