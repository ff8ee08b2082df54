//! Configuration loading
//!
//! Reads `~/.config/askbar/config.toml`. A missing file means defaults; a
//! file that cannot be read or parsed also falls back to defaults but
//! carries a warning for the status line.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, SuggestionsConfig, WidgetConfig};

use crate::error::AskbarError;

const CONFIG_DIR: &str = "askbar";
const CONFIG_FILE: &str = "config.toml";

/// A loaded config plus any problem worth telling the user about
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from an explicit path, or the default location when `None`
///
/// Only an explicitly named file is expected to exist.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path {
        Some(path) => load_config_from_path(path, true),
        None => match config_path() {
            Some(default_path) => load_config_from_path(&default_path, false),
            None => ConfigResult::default(),
        },
    }
}

fn load_config_from_path(path: &Path, must_exist: bool) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound && !must_exist => {
            return ConfigResult::default();
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{} (using defaults)", e)),
        },
    }
}

pub fn parse_config(content: &str) -> Result<Config, AskbarError> {
    toml::from_str(content).map_err(|e| AskbarError::Config(e.message().to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
