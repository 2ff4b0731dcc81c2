//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use podium::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Podium";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PODIUM_CONFIG_DIR";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
    /// Whether the progress bar is shown above the slide area.
    #[serde(default)]
    pub show_progress: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: Some(ThemeMode::System),
            show_progress: Some(true),
        }
    }
}

/// Resolves the config file path.
///
/// The `PODIUM_CONFIG_DIR` environment variable takes precedence over the
/// platform config directory so tests and portable installs can redirect it.
fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join(CONFIG_FILE));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
