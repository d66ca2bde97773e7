//! Configuration lookup and desk startup

use std::path::PathBuf;

use directories::ProjectDirs;
use lodging_core::{BookingDesk, Config, Result};

use crate::cli::CommandLine;

/// Default config file location, if the platform has a config directory
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "onyx", "lodging")
        .map(|dirs| dirs.config_dir().join(Config::FILE_NAME))
}

/// Resolve configuration: `--config`, then the user config file, then defaults.
/// `--data-dir` wins over whatever the file says.
pub fn resolve_config(cli: &CommandLine) -> Result<Config> {
    let mut config = match (&cli.config, default_config_path()) {
        (Some(path), _) => Config::load(path)?,
        (None, Some(path)) => Config::load_or_default(&path)?,
        (None, None) => Config::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

pub fn open_desk(config: &Config) -> Result<BookingDesk> {
    BookingDesk::open(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_config_and_data_dir_override() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("lodging.toml");
        std::fs::write(&config_path, "data_dir = \"from-file\"\nlog_filter = \"warn\"\n").unwrap();

        let cli = CommandLine::try_parse_from([
            "lodging",
            "--config",
            config_path.to_str().unwrap(),
            "hotel",
            "list",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("from-file"));
        assert_eq!(config.log_filter, "warn");

        let cli = CommandLine::try_parse_from([
            "lodging",
            "--config",
            config_path.to_str().unwrap(),
            "--data-dir",
            "elsewhere",
            "hotel",
            "list",
        ])
        .unwrap();
        assert_eq!(resolve_config(&cli).unwrap().data_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cli = CommandLine::try_parse_from([
            "lodging",
            "--config",
            "/definitely/not/here.toml",
            "hotel",
            "list",
        ])
        .unwrap();
        assert!(resolve_config(&cli).is_err());
    }
}
