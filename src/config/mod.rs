pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

const CONFIG_FILE_NAME: &str = ".xctools.toml";

/// Get the global config file path (~/.xctools.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (cwd/.xctools.toml)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
/// An explicitly requested file must parse; discovered files are checked
/// local first, then global, and fall through silently when unreadable.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        return Ok(config);
    }

    // Try local config first
    let local = local_config_path();
    if local.exists() {
        if let Ok(content) = fs::read_to_string(&local) {
            if let Ok(config) = toml::from_str(&content) {
                return Ok(config);
            }
        }
    }

    // Try global config
    if let Some(global) = global_config_path() {
        if global.exists() {
            if let Ok(content) = fs::read_to_string(&global) {
                if let Ok(config) = toml::from_str(&content) {
                    return Ok(config);
                }
            }
        }
    }

    Ok(types::Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[tools]\npod = \"/custom/bin/pod\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.tools.pod, Some(PathBuf::from("/custom/bin/pod")));
        assert!(config.tools.xcodebuild.is_none());
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_config_file_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "not valid toml [[").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }
}
