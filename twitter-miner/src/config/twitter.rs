use serde::Deserialize;
use twitter::Credentials;

/// OAuth 1.0a secrets, left empty when unset
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct TwitterConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl TwitterConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            access_token: self.access_token.clone(),
            access_token_secret: self.access_token_secret.clone(),
        }
    }

    pub(super) fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields = [
            ("CONSUMER_KEY", &mut self.consumer_key),
            ("CONSUMER_SECRET", &mut self.consumer_secret),
            ("ACCESS_TOKEN", &mut self.access_token),
            ("ACCESS_TOKEN_SECRET", &mut self.access_token_secret),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key) {
                *field = value;
            }
        }
    }
}
