use serde::{Deserialize, Deserializer};
use serde_json::Value;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Status object returned by `statuses/user_timeline`
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RawStatus {
    #[serde(deserialize_with = "deserialize_datetime")]
    pub created_at: OffsetDateTime,
    pub id: u64,
    pub id_str: String,
    #[serde(alias = "full_text")]
    pub text: String,
    pub source: String,
    pub user: StatusAuthor,
    #[serde(default)]
    pub coordinates: Option<Value>,
    #[serde(default)]
    pub entities: Option<Value>,
    pub retweet_count: u64,
    pub favorite_count: u64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct StatusAuthor {
    pub id: u64,
    pub screen_name: String,
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    // Wed Oct 10 20:19:24 +0000 2018
    static FORMAT: &[FormatItem<'_>] = format_description!(
        "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute] [year]"
    );
    let s = String::deserialize(deserializer)?;
    OffsetDateTime::parse(&s, FORMAT).map_err(serde::de::Error::custom)
}
