use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "XDF_EXPLORER_CONFIG";

/// Number of list entries shown per result tab unless configured otherwise
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// Explorer settings, read from YAML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Maximum number of entries rendered per result list
    pub display_limit: usize,
    /// Default tracing filter when `RUST_LOG` is not set
    pub log_filter: String,
    /// Log file location; `~/.config/xdf-explorer/xdf-explorer.log` when unset
    pub log_file: Option<PathBuf>,
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            log_filter: "info".to_string(),
            log_file: None,
            color: true,
        }
    }
}

impl ExplorerConfig {
    /// Load the configuration from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e)
        })?;

        Self::from_yaml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config YAML {}: {}", path.display(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ExplorerConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Pick the config for this run.
    ///
    /// An explicit path wins; otherwise `~/.config/xdf-explorer/config.yaml`
    /// is used if it exists. Unreadable files fall back to defaults with a
    /// warning on stderr, since logging is not set up yet at this point.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => config_dir()
                .map(|dir| dir.join("config.yaml"))
                .filter(|path| path.exists()),
        };

        match path {
            Some(path) => Self::load_from_file(&path).unwrap_or_else(|e| {
                eprintln!("Warning: {e}");
                eprintln!("Using default configuration");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Where the log file goes for this configuration
    pub fn log_file_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        match config_dir() {
            Some(dir) => dir.join("xdf-explorer.log"),
            None => PathBuf::from("xdf-explorer.log"),
        }
    }
}

/// `~/.config/xdf-explorer`, if a home directory is known
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("xdf-explorer");
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ExplorerConfig::from_yaml("display_limit: 5\n").unwrap();
        assert_eq!(config.display_limit, 5);
        assert_eq!(config.log_filter, "info");
        assert!(config.color);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ExplorerConfig::from_yaml("  \n").unwrap(), ExplorerConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(ExplorerConfig::from_yaml("display_limit: [1, 2").is_err());
        assert!(ExplorerConfig::from_yaml("display_limit: many").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color: false\nlog_file: /tmp/explorer.log").unwrap();

        let config = ExplorerConfig::load_from_file(file.path()).unwrap();
        assert!(!config.color);
        assert_eq!(config.log_file_path(), PathBuf::from("/tmp/explorer.log"));
    }

    #[test]
    fn test_resolve_falls_back_to_default_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExplorerConfig::resolve(Some(&dir.path().join("nope.yaml")));
        assert_eq!(config, ExplorerConfig::default());
    }
}
