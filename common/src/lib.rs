use std::path::{Path, PathBuf};

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;

mod yaml;

/// Field name to value, in the order the record declares its fields.
pub type ExportMapping = IndexMap<String, Value>;

/// A fixed-shape record that can be exported for serialization.
pub trait Record {
    fn export(&self) -> ExportMapping;
}

static BOM: &str = "\u{feff}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Create `path` if it is not already a directory.
///
/// Only the last component is created, a missing parent is an error.
pub async fn ensure_folder(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        log::debug!("creating output folder {}", path.display());
        fs::create_dir(path).await?;
    }
    Ok(())
}

/// Write `mapping` to `<folder>/<name>.<ext>`, replacing any existing file.
pub async fn export(
    mapping: &ExportMapping,
    format: ExportFormat,
    name: &str,
    folder: impl AsRef<Path>,
) -> Result<PathBuf> {
    ensure_folder(&folder).await?;
    let path = folder
        .as_ref()
        .join(format!("{}.{}", name, format.extension()));

    let contents = match format {
        ExportFormat::Json => to_json(mapping)?,
        ExportFormat::Yaml => yaml::to_yaml(mapping)?.into_bytes(),
    };

    let mut file = fs::File::create(&path).await?;
    file.write_all(&contents).await?;
    file.flush().await?;

    log::info!("wrote {}", path.display());
    Ok(path)
}

fn to_json(mapping: &ExportMapping) -> Result<Vec<u8>> {
    let mut buf = BOM.as_bytes().to_vec();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    mapping.serialize(&mut serializer)?;
    Ok(buf)
}
