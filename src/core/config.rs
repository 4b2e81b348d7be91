use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::ConfigError;

/// User configuration, loaded from `~/.winwalk/config.toml` when present.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WalkerConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    /// Process name of the search host, excluded from every snapshot.
    /// Defaults to the current executable's name.
    #[serde(default)]
    pub process_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tag under which window results are produced when a tag is specified.
    #[serde(default = "default_tag")]
    pub tag: String,

    /// Minimum query length hint for hosts that gate searches themselves.
    /// The matcher still treats an empty query as match-all.
    #[serde(default = "default_minimum_length")]
    pub minimum_length: usize,
}

fn default_tag() -> String {
    "win".to_string()
}

fn default_minimum_length() -> usize {
    1
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            minimum_length: default_minimum_length(),
        }
    }
}

impl WalkerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        match Self::user_config_path() {
            Some(path) if path.exists() => Self::load_config_file(&path),
            _ => {
                debug!(event = "config.defaults_used");
                Ok(WalkerConfig::default())
            }
        }
    }

    fn user_config_path() -> Option<PathBuf> {
        let home_dir = dirs::home_dir()?;
        Some(home_dir.join(".winwalk").join("config.toml"))
    }

    pub fn load_config_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let config: WalkerConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ParseFailed {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config)
    }

    /// Process name used for self-exclusion during enumeration.
    pub fn host_process_name(&self) -> String {
        if let Some(name) = &self.host.process_name {
            return name.clone();
        }
        current_exe_name().unwrap_or_else(|| "winwalk".to_string())
    }
}

fn current_exe_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    let stem = exe.file_stem()?;
    Some(stem.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WalkerConfig::default();
        assert_eq!(config.search.tag, "win");
        assert_eq!(config.search.minimum_length, 1);
        assert!(config.host.process_name.is_none());
    }

    #[test]
    fn test_host_process_name_override() {
        let config = WalkerConfig {
            host: HostConfig {
                process_name: Some("SearchShell".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(config.host_process_name(), "SearchShell");
    }

    #[test]
    fn test_host_process_name_default_is_nonempty() {
        let config = WalkerConfig::default();
        assert!(!config.host_process_name().is_empty());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[host]
process_name = "launcher"

[search]
tag = "w"
"#,
        )
        .expect("Failed to write config");

        let config = WalkerConfig::load_config_file(&path).expect("Failed to load config");
        assert_eq!(config.host.process_name.as_deref(), Some("launcher"));
        assert_eq!(config.search.tag, "w");
        // Unspecified fields fall back to defaults
        assert_eq!(config.search.minimum_length, 1);
    }

    #[test]
    fn test_load_config_file_invalid_toml() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[host\nbroken").expect("Failed to write config");

        let result = WalkerConfig::load_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseFailed { .. })));
    }

    #[test]
    fn test_load_config_file_missing() {
        let result = WalkerConfig::load_config_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
