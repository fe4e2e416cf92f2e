use std::time::Duration;

use reqwest::ClientBuilder;
use reqwest_oauth1::Secrets;

use crate::client::TwitterClient;
use crate::error::TwitterError;

pub static API_BASE: &str = "https://api.twitter.com/1.1";

/// The four OAuth 1.0a secrets of a Twitter app and the account it acts as
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl Credentials {
    pub(crate) fn secrets(&self) -> Secrets<'_> {
        Secrets::new(self.consumer_key.as_str(), self.consumer_secret.as_str())
            .token(self.access_token.as_str(), self.access_token_secret.as_str())
    }
}

/// Create a client that signs every request with `credentials`.
///
/// Nothing is sent here, credentials Twitter rejects surface as
/// [`TwitterError::Authorization`] on the first request.
pub fn authenticate(credentials: &Credentials) -> Result<TwitterClient, TwitterError> {
    authenticate_with_base_url(credentials, API_BASE)
}

pub fn authenticate_with_base_url(
    credentials: &Credentials,
    base_url: &str,
) -> Result<TwitterClient, TwitterError> {
    if credentials.consumer_key.is_empty() || credentials.access_token.is_empty() {
        log::warn!("twitter credentials are empty, requests will be rejected");
    }

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(30))
        .build()?;

    Ok(TwitterClient::new(
        client,
        credentials.clone(),
        base_url.trim_end_matches('/'),
    ))
}
