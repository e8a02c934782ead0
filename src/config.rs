//! Configuration file support
//!
//! Loads rendering defaults from ~/.snipkit.toml (or
//! %USERPROFILE%\.snipkit.toml on Windows). Every key is optional.
//!
//! Example:
//! ```text
//! # snipkit configuration
//! line-numbers = true
//! detect-patterns = false
//! preview-lines = 3
//! ansi = false
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SnipError};

const CONFIG_FILE: &str = ".snipkit.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Prefix rendered lines with line numbers
    pub line_numbers: bool,
    /// Wrap recognised idioms (loops, API calls, ...) in overlay spans
    pub detect_patterns: bool,
    /// Number of lines kept in preview mode
    pub preview_lines: usize,
    /// Emit terminal colours instead of HTML markup
    pub ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_numbers: true,
            detect_patterns: false,
            preview_lines: 3,
            ansi: false,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from file
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loading config");
                Self::from_toml(&contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.normalize();
        Ok(config)
    }

    /// Clamp values into their supported ranges
    fn normalize(&mut self) {
        self.preview_lines = self.preview_lines.clamp(1, 50);
    }

    /// Serialize to the on-disk format
    pub fn to_toml(&self) -> Result<String> {
        let body = toml::to_string(self)?;
        Ok(format!("# snipkit configuration\n\n{}", body))
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| SnipError::Message("No home directory to save config in".into()))?;
        fs::write(&path, self.to_toml()?)?;
        Ok(path)
    }
}
