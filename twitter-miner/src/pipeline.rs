use std::path::PathBuf;

use anyhow::Result;
use twitter::TwitterApi;
use twitter_miner_common::ExportFormat;

use crate::etl::{EtlHandler, FetchedUser};
use crate::record::{ExportMapping, Record};

/// What to do with the exported account
#[derive(Debug, Clone)]
pub enum Output {
    /// Write one file per format to `<folder>/<name>.<ext>`
    Disk {
        folder: PathBuf,
        name: String,
        formats: Vec<ExportFormat>,
    },
    /// Hand the mapping back to the caller
    Response,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Written(Vec<PathBuf>),
    Response(ExportMapping),
    NotFound,
}

/// Fetch `account` (the default account if `None`) and its latest `count` tweets,
/// then dispose of them as `output` says
pub async fn run<A: TwitterApi>(
    api: A,
    account: Option<&str>,
    count: usize,
    output: &Output,
) -> Result<Outcome> {
    let handler = EtlHandler::new(api);

    let fetched = match account {
        Some(account) => handler.fetch_user(account).await?,
        None => handler.fetch_default_user().await?,
    };
    let mut user = match fetched {
        FetchedUser::Found(user) => user,
        FetchedUser::NotFound => return Ok(Outcome::NotFound),
    };
    handler.collect_tweets(&mut user, count).await?;
    let mapping = user.export();

    match output {
        Output::Response => Ok(Outcome::Response(mapping)),
        Output::Disk {
            folder,
            name,
            formats,
        } => {
            let mut written = Vec::with_capacity(formats.len());
            for format in formats {
                written.push(handler.export(&mapping, *format, name, folder).await?);
            }
            Ok(Outcome::Written(written))
        }
    }
}
