use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum, ValueHint};
use twitter_miner::config::Config;
use twitter_miner::etl::DEFAULT_ACCOUNT;
use twitter_miner::pipeline::{self, Outcome, Output};
use twitter_miner_common::ExportFormat;

/// Get data about a twitter account and save it into JSON and YAML files
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Target account name
    #[arg(long)]
    account: Option<String>,

    /// File formats to write
    #[arg(long, value_enum, default_value_t = FormatArg::Both)]
    format: FormatArg,

    /// Number of most recent tweets to request
    #[arg(long)]
    count: Option<usize>,

    /// Directory to write to, defaults to ./data
    #[arg(long, value_hint = ValueHint::DirPath)]
    output_folder: Option<PathBuf>,

    /// File name without extension, defaults to "file"
    #[arg(long)]
    output_name: Option<String>,

    /// Config file location
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Json,
    Yaml,
    Both,
}

impl FormatArg {
    fn formats(self) -> Vec<ExportFormat> {
        match self {
            Self::Json => vec![ExportFormat::Json],
            Self::Yaml => vec![ExportFormat::Yaml],
            Self::Both => vec![ExportFormat::Json, ExportFormat::Yaml],
        }
    }
}

#[tokio::main]
async fn main() {
    twitter_miner::init_logging();

    match run().await {
        Ok(_) => process::exit(0),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let conf = Config::load(args.config.as_deref())?;

    let output = Output::Disk {
        folder: match args.output_folder {
            Some(folder) => folder,
            None => conf.output.folder()?,
        },
        name: args.output_name.unwrap_or_else(|| conf.output.name.clone()),
        formats: args.format.formats(),
    };
    let count = args.count.unwrap_or(conf.output.timeline_count);

    let api = twitter::authenticate(&conf.twitter.credentials())?;
    match pipeline::run(api, args.account.as_deref(), count, &output).await? {
        Outcome::Written(paths) => {
            for path in paths {
                println!("Saved {}", path.display());
            }
            Ok(())
        }
        Outcome::Response(_) => Ok(()),
        Outcome::NotFound => Err(anyhow!(
            "Account @{} not found",
            args.account.as_deref().unwrap_or(DEFAULT_ACCOUNT)
        )),
    }
}
