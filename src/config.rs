use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::infra::factory::{FileFactory, Preset, PresetFactory, RecordFactory};

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    pub preset: Option<Preset>,
    pub record: Option<PathBuf>,
}

/// Where the record comes from once CLI flags and config are merged.
#[derive(Debug, PartialEq)]
pub enum RecordSource {
    Preset(Preset),
    File(PathBuf),
}

impl RecordSource {
    pub fn factory(self) -> Box<dyn RecordFactory> {
        match self {
            RecordSource::Preset(preset) => Box::new(PresetFactory { preset }),
            RecordSource::File(path) => Box::new(FileFactory { path }),
        }
    }
}

pub fn load_config() -> Result<ConfigFile> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<ConfigFile> {
    if !config_path.exists() {
        return Ok(ConfigFile::default());
    }

    tracing::debug!(path = %config_path.display(), "reading config file");
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file {config_path:?}"))?;
    let mut config: ConfigFile = toml::from_str(&config_content)
        .with_context(|| format!("Invalid config file {config_path:?}"))?;

    // Relative record paths are relative to the config file
    if let (Some(record), Some(config_dir)) = (&config.record, config_path.parent()) {
        if record.is_relative() {
            config.record = Some(config_dir.join(record));
        }
    }
    Ok(config)
}

/// CLI flags win over the config file, which wins over the default preset.
pub fn resolve_source(cli: &Cli, config: ConfigFile) -> RecordSource {
    if let Some(path) = &cli.record {
        return RecordSource::File(path.clone());
    }
    if let Some(preset) = cli.preset {
        return RecordSource::Preset(preset);
    }
    if let Some(path) = config.record {
        return RecordSource::File(path);
    }
    RecordSource::Preset(config.preset.unwrap_or_default())
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("series-inspector"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_config_keys_parse() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "preset = \"breaking-bad\"\nrecord = \"/tmp/series.json\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.preset, Some(Preset::BreakingBad));
        assert_eq!(config.record, Some(PathBuf::from("/tmp/series.json")));
    }

    #[test]
    fn test_relative_record_is_resolved_against_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "record = \"records/series.json\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(
            config.record,
            Some(temp_dir.path().join("records").join("series.json"))
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "preset = \"the-wire\"\n").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_resolve_defaults_to_ok_ko() {
        let cli = Cli::parse_from(["series-inspector"]);
        assert_eq!(
            resolve_source(&cli, ConfigFile::default()),
            RecordSource::Preset(Preset::OkKo)
        );
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let config = || ConfigFile {
            preset: Some(Preset::OkKo),
            record: Some(PathBuf::from("from-config.json")),
        };

        let cli = Cli::parse_from(["series-inspector", "--preset", "breaking-bad"]);
        assert_eq!(
            resolve_source(&cli, config()),
            RecordSource::Preset(Preset::BreakingBad)
        );

        let cli = Cli::parse_from(["series-inspector", "--record", "from-cli.toml"]);
        assert_eq!(
            resolve_source(&cli, config()),
            RecordSource::File(PathBuf::from("from-cli.toml"))
        );

        let cli = Cli::parse_from(["series-inspector"]);
        assert_eq!(
            resolve_source(&cli, config()),
            RecordSource::File(PathBuf::from("from-config.json"))
        );
    }

    #[test]
    fn test_preset_and_record_conflict() {
        let result =
            Cli::try_parse_from(["series-inspector", "--preset", "ok-ko", "--record", "x.json"]);
        assert!(result.is_err());
    }
}
