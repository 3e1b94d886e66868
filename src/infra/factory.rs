use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::domain::models::{Seasons, Series};

/// Something on the far side of a module boundary that hands out a series.
pub trait RecordFactory {
    fn create(&self) -> Result<Series>;
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    OkKo,
    BreakingBad,
}

/// Built-in records. Always returns the same series for a given preset.
pub struct PresetFactory {
    pub preset: Preset,
}

impl RecordFactory for PresetFactory {
    fn create(&self) -> Result<Series> {
        let series = match self.preset {
            Preset::OkKo => Series::new("OK K.O.! Let's Be Heroes", Seasons::count(3)),
            Preset::BreakingBad => Series::new("Breaking Bad", Seasons::count(5)),
        };
        Ok(series)
    }
}

/// Loads a record from a `.toml` or JSON file.
pub struct FileFactory {
    pub path: PathBuf,
}

impl RecordFactory for FileFactory {
    fn create(&self) -> Result<Series> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read record file {:?}", self.path))?;

        let is_toml = self.path.extension().and_then(|s| s.to_str()) == Some("toml");
        let series = if is_toml {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML record {:?}", self.path))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON record {:?}", self.path))?
        };

        tracing::debug!(path = %self.path.display(), "loaded record file");
        Ok(series)
    }
}
