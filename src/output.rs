use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use crate::import::{ImportManifest, ImportRecord};

pub enum Target {
    Stdout,
    File(PathBuf),
}

impl Target {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    fn writer(&self) -> anyhow::Result<Box<dyn Write>> {
        Ok(match self {
            Self::Stdout => Box::new(std::io::stdout().lock()),
            Self::File(path) => Box::new(
                std::fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            ),
        })
    }
}

pub fn write_manifest(
    manifest: &ImportManifest,
    target: &Target,
    compact: bool,
) -> anyhow::Result<()> {
    let mut writer = target.writer()?;
    if compact {
        serde_json::to_writer(&mut writer, manifest)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, manifest)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// One record per line, for piping into other tools.
pub fn write_records(records: &[ImportRecord], target: &Target) -> anyhow::Result<()> {
    let mut writer = target.writer()?;
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }
    Ok(())
}
