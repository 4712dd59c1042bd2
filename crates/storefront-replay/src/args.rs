//! Command-line surface for `storefront-replay`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use storefront_config::{paths, AppConfig};

#[derive(Parser, Debug)]
#[command(
    name = "storefront-replay",
    version,
    about = "Replay a recorded action log through the storefront entity cache",
    long_about = None
)]
pub struct Cli {
    /// Action log with one JSON action record per line
    ///
    /// Defaults to `default_replay_file` from the config, then the recorded
    /// log in the cache directory.
    pub file: Option<PathBuf>,
}

impl Cli {
    /// The action log to replay
    pub fn replay_file(&self, config: &AppConfig) -> Result<PathBuf> {
        if let Some(path) = self.file.as_ref().or(config.default_replay_file.as_ref()) {
            return Ok(path.clone());
        }
        paths::recorded_actions_path()
            .context("No action log given and no recorded log available")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_argument_wins() {
        let cli = Cli::try_parse_from(["storefront-replay", "catalog.jsonl"]).unwrap();
        let config = AppConfig {
            default_replay_file: Some(PathBuf::from("configured.jsonl")),
            ..AppConfig::default()
        };
        assert_eq!(
            cli.replay_file(&config).unwrap(),
            PathBuf::from("catalog.jsonl")
        );
    }

    #[test]
    fn test_falls_back_to_config() {
        let cli = Cli::try_parse_from(["storefront-replay"]).unwrap();
        let config = AppConfig {
            default_replay_file: Some(PathBuf::from("configured.jsonl")),
            ..AppConfig::default()
        };
        assert_eq!(
            cli.replay_file(&config).unwrap(),
            PathBuf::from("configured.jsonl")
        );
    }

    #[test]
    fn test_help_is_not_a_file() {
        let err = Cli::try_parse_from(["storefront-replay", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
