use std::path::{Path, PathBuf};

use anyhow::Result;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use twitter::{RawStatus, TwitterApi, TwitterError};
use twitter_miner_common::ExportFormat;

use crate::record::{ExportMapping, Record, Tweet, User};

/// Account looked up when none is given
pub const DEFAULT_ACCOUNT: &str = "twitter";

/// Timeline page size requested when none is given
pub const DEFAULT_TIMELINE_COUNT: usize = 20;

/// Result of an account lookup
#[derive(Debug, Clone, PartialEq)]
pub enum FetchedUser {
    Found(User),
    NotFound,
}

/// Turns Twitter API responses into exported records using one client
pub struct EtlHandler<A> {
    api: A,
}

impl<A: TwitterApi> EtlHandler<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Look up `account`. An account Twitter doesn't know is not an error.
    pub async fn fetch_user(&self, account: &str) -> Result<FetchedUser, TwitterError> {
        match self.api.get_user(account).await {
            Ok(raw) => {
                log::info!("found @{} ({})", raw.screen_name, raw.id);
                Ok(FetchedUser::Found(raw.into()))
            }
            Err(TwitterError::NotFound(reason)) => {
                log::warn!("account @{} not found: {}", account, reason);
                Ok(FetchedUser::NotFound)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn fetch_default_user(&self) -> Result<FetchedUser, TwitterError> {
        self.fetch_user(DEFAULT_ACCOUNT).await
    }

    /// A single page of at most `count` statuses, newest first
    pub async fn fetch_timeline(
        &self,
        user: &User,
        count: usize,
    ) -> Result<Vec<RawStatus>, TwitterError> {
        let statuses = self.api.user_timeline(user.id, count).await?;
        log::info!("retrieved {} tweets from {}", statuses.len(), user.name);
        Ok(statuses)
    }

    pub fn map_post(&self, status: &RawStatus) -> Tweet {
        let created_at = format_created_at(status.created_at).unwrap_or_else(|e| {
            log::warn!("unable to format created_at of {}: {}", status.id_str, e);
            status.created_at.to_string()
        });

        Tweet {
            id: status.id_str.clone(),
            user_name: status.user.screen_name.clone(),
            created_at,
            content: status.text.clone(),
            source: status.source.clone(),
            retweet_count: status.retweet_count,
            favorite_count: status.favorite_count,
            coordinates: status.coordinates.clone(),
            entities: status.entities.clone(),
        }
    }

    /// Fetch the timeline of `user` and attach it
    pub async fn collect_tweets(&self, user: &mut User, count: usize) -> Result<(), TwitterError> {
        let tweets = self
            .fetch_timeline(user, count)
            .await?
            .iter()
            .map(|status| self.map_post(status).export())
            .collect();
        user.set_posts(tweets);
        Ok(())
    }

    pub async fn export(
        &self,
        mapping: &ExportMapping,
        format: ExportFormat,
        name: &str,
        folder: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        twitter_miner_common::export(mapping, format, name, folder).await
    }
}

static DATE: &[FormatItem<'_>] =
    format_description!("[month repr:short] [day], [year] [hour]:[minute]:[second]");
static ZONE: &[FormatItem<'_>] =
    format_description!("UTC[offset_hour sign:mandatory]:[offset_minute]");
static OFFSET: &[FormatItem<'_>] =
    format_description!("[offset_hour sign:mandatory][offset_minute]");

/// `Jan 01, 2024 00:00:00 UTC+0000`
fn format_created_at(ts: OffsetDateTime) -> Result<String, time::error::Format> {
    let zone = if ts.offset().is_utc() {
        "UTC".to_owned()
    } else {
        ts.format(ZONE)?
    };
    Ok(format!("{} {}{}", ts.format(DATE)?, zone, ts.format(OFFSET)?))
}
