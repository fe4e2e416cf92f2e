use std::path::PathBuf;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use clap::{Parser, ValueHint};
use twitter::Credentials;
use twitter_miner::config::Config;
use twitter_miner::http;

/// Serve twitter account exports over HTTP
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Config file location
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config file and LISTEN
    #[arg(short, long)]
    listen: Option<String>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    twitter_miner::init_logging();

    let args = Args::parse();
    let mut cfg = Config::load(args.config.as_deref())?;
    if let Some(listen) = args.listen {
        cfg.server.listen = listen;
    }

    let credentials = cfg.twitter.credentials();
    let listen_addr = cfg.server.listen.clone();
    log::info!("Starting server at {}", listen_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(cfg.clone()))
            .app_data(Data::new(credentials.clone()))
            .configure(http::configure::<Credentials>)
    })
    .bind(listen_addr)?
    .run()
    .await?;

    Ok(())
}
