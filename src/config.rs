use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{Result, TabhookError};
use crate::shell::ShellKind;

const USER_CONFIG_PATH: &str = ".config/tabhook.toml";
const LOCAL_CONFIG_NAME: &str = ".tabhook.toml";

/// Known top-level config keys
const KNOWN_KEYS: &[&str] = &["shell"];

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Default shell to generate for when --shell is not given
    pub shell: Option<ShellKind>,
}

impl Config {
    /// Load config with hierarchy: user -> current directory.
    ///
    /// Order (later overrides earlier):
    /// 1. User config (~/.config/tabhook.toml)
    /// 2. Current directory config (.tabhook.toml)
    pub fn load() -> Result<Self> {
        let mut config = Self::load_user()?;

        if let Ok(cwd) = std::env::current_dir() {
            let local = Self::load_local(&cwd)?;
            config = config.merge(local);
        }

        Ok(config)
    }

    /// Load config exclusively from a specific file (ignores default locations).
    /// Unlike load_from_path, this returns an error if the file doesn't exist.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TabhookError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::load_from_path(path)
    }

    /// Load user config from ~/.config/tabhook.toml
    fn load_user() -> Result<Self> {
        let home = std::env::var("HOME").map_err(|_| TabhookError::NoHome)?;
        let config_path = PathBuf::from(&home).join(USER_CONFIG_PATH);
        Self::load_from_path(&config_path)
    }

    /// Load local config from dir/.tabhook.toml (returns default if not exists)
    fn load_local(dir: &Path) -> Result<Self> {
        Self::load_from_path(&dir.join(LOCAL_CONFIG_NAME))
    }

    /// Load config from a specific path (returns default if not exists)
    fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            TabhookError::Config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;

        // First parse as generic TOML to check for unknown keys
        if let Ok(value) = contents.parse::<toml::Table>() {
            let known: HashSet<&str> = KNOWN_KEYS.iter().copied().collect();
            for key in value.keys() {
                if !known.contains(key.as_str()) {
                    warn!(
                        file = %config_path.display(),
                        key = %key,
                        "Unknown config key (ignored)"
                    );
                }
            }
        }

        toml::from_str(&contents).map_err(|e| {
            TabhookError::Config(format!("Failed to parse {}: {}", config_path.display(), e))
        })
    }

    /// Merge another config into this one (other takes precedence for set values).
    fn merge(self, other: Self) -> Self {
        Config {
            shell: other.shell.or(self.shell),
        }
    }
}
