// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving the overlay theme to a `settings.toml` file.
//!
//! Parsing is deliberately lenient: a malformed file yields the default
//! configuration, and individual theme entries are validated later, key by
//! key, so one bad color never discards the others.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPeek";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Raw, unvalidated overlay theme entries as stored on disk.
///
/// Colors are CSS-style strings (`#rrggbb`, `rgba(…)`); the disabled opacity
/// is a number that will be clamped into `[0, 1]`. `None` means "use the
/// built-in default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub button_bg: Option<String>,
    pub button_text: Option<String>,
    pub button_hover_bg: Option<String>,
    pub button_hover_text: Option<String>,
    pub button_active_bg: Option<String>,
    pub button_disabled_opacity: Option<f32>,
    pub close_button_bg: Option<String>,
    pub close_button_text: Option<String>,
    pub close_button_hover_bg: Option<String>,
    pub close_button_hover_text: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
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
