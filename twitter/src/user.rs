use serde::Deserialize;

/// Account object returned by `users/show`
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RawUser {
    pub id: u64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
    pub url: Option<String>,
    pub location: Option<String>,
    pub followers_count: u64,
    pub friends_count: u64,
    pub statuses_count: u64,
}
