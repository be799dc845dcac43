//! Configuration management module.
//!
//! Loads application settings from a JSON file next to the executable.
//! The menu itself is never written anywhere.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const ENV_CONFIG: &str = "MENU_CONFIG";

const CONFIG_FILE_NAME: &str = "menu_manager_config.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading on the home view.
    pub restaurant_name: String,
    /// Prefix for prices, e.g. `R` for `R129`.
    pub currency_symbol: String,
    /// Start with the built-in sample dishes.
    pub load_sample_menu: bool,
    /// JSON file of starting dishes. Takes precedence over the sample menu.
    pub seed_menu_path: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            restaurant_name: "Christoffel's Menu".to_string(),
            currency_symbol: "R".to_string(),
            load_sample_menu: true,
            seed_menu_path: String::new(),
            window_width: 420.0,
            window_height: 780.0,
        }
    }
}

impl Config {
    /// Format a stored price for display, e.g. `R129`.
    pub fn format_price(&self, price: &str) -> String {
        format!("{}{}", self.currency_symbol, price)
    }

    pub fn seed_menu_path(&self) -> Option<&Path> {
        if self.seed_menu_path.trim().is_empty() {
            None
        } else {
            Some(Path::new(self.seed_menu_path.trim()))
        }
    }
}

/// Configuration manager for loading config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        let config_path = std::env::var_os(ENV_CONFIG)
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::get_exe_directory().join(CONFIG_FILE_NAME));
        Self::with_path(config_path)
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the config file path.
    pub fn get_config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(&self) -> Config {
        if !self.config_path.exists() {
            log::debug!("No config at {}, using defaults", self.config_path.display());
            return Config::default();
        }

        match self.try_load() {
            Ok(config) => {
                log::info!("Loaded config from {}", self.config_path.display());
                config
            }
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                Config::default()
            }
        }
    }

    fn try_load(&self) -> Result<Config> {
        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config {}", self.config_path.display()))?;
        let mut config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", self.config_path.display()))?;

        // Keep the window usable even with a bad size in the file.
        let defaults = Config::default();
        if !config.window_width.is_finite() || config.window_width <= 0.0 {
            config.window_width = defaults.window_width;
        }
        if !config.window_height.is_finite() || config.window_height <= 0.0 {
            config.window_height = defaults.window_height;
        }

        Ok(config)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
