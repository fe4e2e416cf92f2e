use async_trait::async_trait;
use reqwest::Client;
use reqwest_oauth1::OAuthClientProvider;
use serde::de::DeserializeOwned;

use crate::auth::Credentials;
use crate::error::TwitterError;
use crate::response;
use crate::status::RawStatus;
use crate::user::RawUser;

/// Read-only Twitter endpoints used to export an account
#[async_trait]
pub trait TwitterApi: Send + Sync {
    /// Look up a public account by its handle
    async fn get_user(&self, screen_name: &str) -> Result<RawUser, TwitterError>;

    /// Up to `count` most recent statuses posted by `user_id`, newest first
    async fn user_timeline(&self, user_id: u64, count: usize)
        -> Result<Vec<RawStatus>, TwitterError>;
}

#[derive(Clone, Debug)]
pub struct TwitterClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

impl TwitterClient {
    pub(crate) fn new(client: Client, credentials: Credentials, base_url: &str) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.to_owned(),
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, TwitterError> {
        let url = self.endpoint(path);
        log::debug!("GET {} {:?}", url, params);

        let resp = self
            .client
            .clone()
            .oauth1(self.credentials.secrets())
            .get(url.as_str())
            .query(params)
            .send()
            .await
            .map_err(send_error)?;
        let resp = response::check(resp).await?;

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn send_error(err: reqwest_oauth1::Error) -> TwitterError {
    match err {
        reqwest_oauth1::Error::Reqwest(e) => TwitterError::Request(e),
        other => TwitterError::OAuth(other.to_string()),
    }
}

#[async_trait]
impl TwitterApi for TwitterClient {
    async fn get_user(&self, screen_name: &str) -> Result<RawUser, TwitterError> {
        let params = [("screen_name", screen_name.to_owned())];
        self.get("users/show.json", &params).await
    }

    async fn user_timeline(
        &self,
        user_id: u64,
        count: usize,
    ) -> Result<Vec<RawStatus>, TwitterError> {
        let params = [
            ("user_id", user_id.to_string()),
            ("count", count.to_string()),
        ];
        self.get("statuses/user_timeline.json", &params).await
    }
}
