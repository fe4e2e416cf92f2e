use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use self::output::OutputConfig;
use self::server::ServerConfig;
use self::twitter::TwitterConfig;

pub mod output;
pub mod server;
pub mod twitter;

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub twitter: TwitterConfig,
    pub output: OutputConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let conf_contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config {}", path.as_ref().display()))?;
        Ok(toml::from_str(&conf_contents)?)
    }

    /// Build the process configuration once at startup.
    ///
    /// A `.env` file in the working directory is loaded first, then environment
    /// variables override whatever the optional config file set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Ok(env_file) = dotenv::dotenv() {
            log::debug!("loaded {}", env_file.display());
        }

        let mut conf = match path {
            Some(path) => Self::read(path)?,
            None => Self::default(),
        };
        conf.apply_vars(|key| std::env::var(key).ok());
        Ok(conf)
    }

    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.twitter.apply_vars(&lookup);
        self.server.apply_vars(&lookup);
    }
}
