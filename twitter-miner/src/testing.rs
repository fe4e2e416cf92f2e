use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use twitter::{RawStatus, RawUser, TwitterApi, TwitterError};

pub fn raw_user() -> RawUser {
    serde_json::from_value(json!({
        "id": 1,
        "id_str": "1",
        "name": "Test",
        "screen_name": "Test",
        "url": "http://x",
        "location": "Earth",
        "followers_count": 10,
        "friends_count": 5,
        "statuses_count": 100
    }))
    .unwrap()
}

pub fn raw_status() -> RawStatus {
    serde_json::from_value(json!({
        "created_at": "Mon Jan 01 00:00:00 +0000 2024",
        "id": 999,
        "id_str": "999",
        "text": "hello",
        "source": "web",
        "user": {"id": 1, "screen_name": "Test"},
        "coordinates": null,
        "entities": null,
        "retweet_count": 0,
        "favorite_count": 1
    }))
    .unwrap()
}

#[derive(Clone, Copy)]
enum Failure {
    NotFound,
    Unauthorized,
}

/// Canned Twitter responses that record what was asked for
#[derive(Clone)]
pub struct StubApi {
    user: Option<RawUser>,
    timeline: Vec<RawStatus>,
    failure: Option<Failure>,
    looked_up: Arc<Mutex<Vec<String>>>,
    timeline_requests: Arc<Mutex<Vec<(u64, usize)>>>,
}

impl StubApi {
    pub fn new(user: RawUser, timeline: Vec<RawStatus>) -> Self {
        Self {
            user: Some(user),
            timeline,
            failure: None,
            looked_up: Default::default(),
            timeline_requests: Default::default(),
        }
    }

    pub fn missing() -> Self {
        Self {
            user: None,
            timeline: vec![],
            failure: Some(Failure::NotFound),
            looked_up: Default::default(),
            timeline_requests: Default::default(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            failure: Some(Failure::Unauthorized),
            ..Self::missing()
        }
    }

    pub fn looked_up(&self) -> Vec<String> {
        self.looked_up.lock().unwrap().clone()
    }

    pub fn timeline_requests(&self) -> Vec<(u64, usize)> {
        self.timeline_requests.lock().unwrap().clone()
    }

    fn fail(&self) -> TwitterError {
        match self.failure {
            Some(Failure::Unauthorized) => {
                TwitterError::Authorization("Could not authenticate you.".to_owned())
            }
            _ => TwitterError::NotFound("User not found.".to_owned()),
        }
    }
}

#[async_trait]
impl TwitterApi for StubApi {
    async fn get_user(&self, screen_name: &str) -> Result<RawUser, TwitterError> {
        self.looked_up.lock().unwrap().push(screen_name.to_owned());
        match (&self.user, self.failure) {
            (Some(user), None) => Ok(user.clone()),
            _ => Err(self.fail()),
        }
    }

    async fn user_timeline(
        &self,
        user_id: u64,
        count: usize,
    ) -> Result<Vec<RawStatus>, TwitterError> {
        self.timeline_requests.lock().unwrap().push((user_id, count));
        if self.failure.is_some() {
            return Err(self.fail());
        }
        Ok(self.timeline.iter().take(count).cloned().collect())
    }
}
