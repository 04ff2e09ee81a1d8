// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Default auto-dismiss delay for toasts
//! - `[diagnostics]` - Lifecycle event buffer sizing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `BATCH_NOTIFY_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use batch_notify::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.notifications.auto_dismiss_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::notification::AutoDismiss;
use crate::error::Result;
use crate::notifications::NotificationDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "BatchNotify";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BATCH_NOTIFY_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Auto-dismiss delay used when a caller does not set one. `0` disables it.
    #[serde(default)]
    pub auto_dismiss_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub buffer_capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Builds the service defaults, clamping out-of-range values.
    #[must_use]
    pub fn notification_defaults(&self) -> NotificationDefaults {
        let auto_dismiss_ms = self
            .notifications
            .auto_dismiss_ms
            .unwrap_or(DEFAULT_AUTO_DISMISS_MS);
        NotificationDefaults {
            auto_dismiss: AutoDismiss::clamped_default(auto_dismiss_ms),
        }
    }

    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(
            self.diagnostics
                .buffer_capacity
                .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        )
    }
}

/// Resolves the settings file location.
///
/// An explicit `config_dir` wins over the platform default.
#[must_use]
pub fn resolve_config_path(config_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = config_dir.or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))?;
    Some(dir.join(CONFIG_FILE))
}

fn get_default_config_path() -> Option<PathBuf> {
    let env_dir = std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    resolve_config_path(env_dir)
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

/// Loads settings from `path`. Invalid TOML falls back to defaults.
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
