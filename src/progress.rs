//! Per-module progress persistence.
//!
//! Completion percentages live in a flat JSON mapping of module key to
//! integer percent, stored under the platform config directory. The
//! simulator core never writes this file; only the module-completion
//! flow does.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::learning::ModuleId;

/// Per-module completion state, persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressStore {
    /// Module key → completion percent (0–100)
    modules: HashMap<String, u8>,
    /// When the store was last written
    updated_at: Option<DateTime<Utc>>,
}

impl ProgressStore {
    /// Gets the progress file path.
    ///
    /// - Linux: `~/.config/Panelwise/progress.json`
    /// - macOS: `~/Library/Application Support/Panelwise/progress.json`
    /// - Windows: `%APPDATA%\Panelwise\progress.json`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("Panelwise");
        Ok(config_dir.join("progress.json"))
    }

    /// Loads progress from the given file, returning an empty store when
    /// the file does not exist yet.
    ///
    /// Percent values outside 0–100 are clamped on load so a hand-edited
    /// file cannot push the UI out of range.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read progress file: {}", path.display()))?;
        let mut store: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse progress file: {}", path.display()))?;

        for percent in store.modules.values_mut() {
            *percent = (*percent).min(100);
        }
        Ok(store)
    }

    /// Loads progress from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Saves progress to the given file.
    ///
    /// Writes via a temp file + rename so the store is never left
    /// half-written.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        self.updated_at = Some(Utc::now());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create progress directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize progress")?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write progress file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace progress file: {}", path.display()))?;
        Ok(())
    }

    /// Saves progress to the default location.
    pub fn save(&mut self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Completion percent for a module (0 when never visited).
    #[must_use]
    pub fn percent(&self, module: ModuleId) -> u8 {
        self.modules.get(module.key()).copied().unwrap_or(0)
    }

    /// Records a module's completion percent, clamped to 0–100. Progress
    /// only moves forward: a lower percent never overwrites a higher one.
    pub fn record(&mut self, module: ModuleId, percent: u8) {
        let entry = self.modules.entry(module.key().to_string()).or_insert(0);
        *entry = (*entry).max(percent.min(100));
    }

    /// Marks a module fully complete.
    pub fn complete(&mut self, module: ModuleId) {
        self.record(module, 100);
    }

    /// Average completion across all modules, for the home screen.
    #[must_use]
    pub fn overall(&self) -> u8 {
        let total: u32 = ModuleId::ALL
            .iter()
            .map(|module| u32::from(self.percent(*module)))
            .sum();
        (total / ModuleId::ALL.len() as u32) as u8
    }
}
