use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

/// Where exported files go and how much of the timeline they hold
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub folder: Option<PathBuf>,
    pub name: String,
    pub timeline_count: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            folder: None,
            name: "file".to_owned(),
            timeline_count: crate::etl::DEFAULT_TIMELINE_COUNT,
        }
    }
}

impl OutputConfig {
    /// The configured folder, or `data` under the working directory
    pub fn folder(&self) -> Result<PathBuf> {
        match &self.folder {
            Some(folder) => Ok(folder.clone()),
            None => Ok(std::env::current_dir()?.join("data")),
        }
    }
}
