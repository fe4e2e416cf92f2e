use anyhow::{anyhow, Result};
use twitter_miner::config::Config;
use twitter_miner::pipeline::{self, Outcome, Output};
use twitter_miner_common::ExportFormat;

static ACCOUNT: &str = "manutegaming";
const COUNT: usize = 1000;

#[tokio::main]
async fn main() -> Result<()> {
    twitter_miner::init_logging();

    let conf = Config::load(None)?;
    let output = Output::Disk {
        folder: conf.output.folder()?,
        name: conf.output.name.clone(),
        formats: vec![ExportFormat::Json],
    };

    let api = twitter::authenticate(&conf.twitter.credentials())?;
    match pipeline::run(api, Some(ACCOUNT), COUNT, &output).await? {
        Outcome::NotFound => Err(anyhow!("Account @{} not found", ACCOUNT)),
        _ => Ok(()),
    }
}
