//! CLI configuration.
//!
//! Loaded from a JSON file; every key is optional and command-line flags
//! take precedence over the file.

use anyhow::{Context, Result};
use framecode_core::Framerate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Rate used for timecodes without an `@rate` suffix.
    pub default_framerate: Framerate,
    /// Use drop-frame labels when the rate supports them.
    pub drop_frame: bool,
    /// Append `@rate` to printed timecodes.
    pub rate_suffix: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_framerate: Framerate::Fps29_97,
            drop_frame: true,
            rate_suffix: true,
        }
    }
}

/// Default config location, e.g. `~/.config/framecode/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("framecode").join("config.json"))
}

/// Load configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<CliConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Load config from `custom_path`, the default location, or defaults.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<CliConfig> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        _ => Ok(CliConfig::default()),
    }
}
