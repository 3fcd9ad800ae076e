//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme display mode (auto-detect, dark, or light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI behavior settings
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Gets the configuration directory path.
    ///
    /// - Linux: `~/.config/Panelwise/`
    /// - macOS: `~/Library/Application Support/Panelwise/`
    /// - Windows: `%APPDATA%\Panelwise\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("Panelwise");
        Ok(config_dir)
    }

    /// Gets the configuration file path.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location, falling back to
    /// defaults when the file does not exist yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        Ok(config)
    }

    /// Saves configuration to the default location.
    ///
    /// Writes via a temp file + rename so the config is never left in a
    /// corrupted state.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write config file: {}", temp_path.display()))?;
        fs::rename(&temp_path, &config_path).with_context(|| {
            format!("Failed to replace config file: {}", config_path.display())
        })?;
        Ok(())
    }
}
