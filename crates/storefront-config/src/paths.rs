//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/storefront-cache/`, `~/.cache/storefront-cache/`
//! - macOS: `~/Library/Application Support/storefront-cache/`, `~/Library/Caches/storefront-cache/`
//! - Windows: `%APPDATA%\storefront-cache\`, `%LOCALAPPDATA%\storefront-cache\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "storefront-cache";

/// Get the application cache directory, creating it if needed
/// Returns ~/.cache/storefront-cache/ on Linux, ~/Library/Caches/storefront-cache/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Path of the app config file in the platform config directory
///
/// Only computes the path; nothing is created.
pub fn app_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join("config.toml"))
}

/// Get path to the recorded action log replayed when no file is given
pub fn recorded_actions_path() -> Result<PathBuf> {
    Ok(cache_dir()?.join("actions.jsonl"))
}
