use std::{env, path::PathBuf};

use crate::paths;

pub const CONFIG_FILE: &str = ".storefront-cache.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.storefront-cache.toml` in the current working directory
/// 2. `.storefront-cache.toml` in the home directory
/// 3. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidates()
        .into_iter()
        .find_map(|path| match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some(content)
            }
            Err(_) => None,
        })
}

fn candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    if let Some(path) = paths::app_config_path() {
        candidates.push(path);
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwd_is_searched_first() {
        let candidates = candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
    }
}
