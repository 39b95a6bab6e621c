//! Configuration management (`debugmenu.toml`)
//!
//! Loads overlay, input and authoring settings. Settings are stored in TOML
//! format in the platform-specific config directory; missing fields fall
//! back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::overlay::{OverlayStyle, TextStyle};

/// File name looked up inside [`config_dir`]
pub const CONFIG_FILE: &str = "debugmenu.toml";

/// Errors raised while reading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Debug menu configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Live overlay appearance
    #[serde(default)]
    pub overlay: OverlayConfig,
    /// Navigation input
    #[serde(default)]
    pub input: InputConfig,
    /// Authoring view
    #[serde(default)]
    pub authoring: AuthoringConfig,
}

/// Live overlay appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Panel title font size (default: 14)
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f32,
    /// Item font size (default: 12)
    #[serde(default = "default_item_font_size")]
    pub item_font_size: f32,
    /// Vertical spacing between items (default: 5)
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Show the menu on startup (default: false)
    #[serde(default)]
    pub start_visible: bool,
}

/// Navigation input configuration.
///
/// Key names are matched case-insensitively by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Axis magnitude below which a stick counts as released (default: 0.5)
    #[serde(default = "default_axis_dead_zone")]
    pub axis_dead_zone: f32,
    /// Seconds between repeated steps while an axis is held (default: 0.2)
    #[serde(default = "default_repeat_delay")]
    pub repeat_delay: f32,
    /// Show/hide the menu (default: F3)
    #[serde(default = "default_toggle_key")]
    pub toggle_key: String,
    /// Re-validate the selected item (default: Enter)
    #[serde(default = "default_validate_key")]
    pub validate_key: String,
    /// Switch to the next panel (default: PageDown)
    #[serde(default = "default_next_panel_key")]
    pub next_panel_key: String,
    /// Switch to the previous panel (default: PageUp)
    #[serde(default = "default_previous_panel_key")]
    pub previous_panel_key: String,
}

/// Authoring view configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthoringConfig {
    /// Drive the authoring backend at runtime (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_title_font_size() -> f32 {
    14.0
}
fn default_item_font_size() -> f32 {
    12.0
}
fn default_spacing() -> f32 {
    5.0
}

fn default_axis_dead_zone() -> f32 {
    0.5
}
fn default_repeat_delay() -> f32 {
    0.2
}
fn default_toggle_key() -> String {
    "F3".to_string()
}
fn default_validate_key() -> String {
    "Enter".to_string()
}
fn default_next_panel_key() -> String {
    "PageDown".to_string()
}
fn default_previous_panel_key() -> String {
    "PageUp".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title_font_size: default_title_font_size(),
            item_font_size: default_item_font_size(),
            spacing: default_spacing(),
            start_visible: false,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            axis_dead_zone: default_axis_dead_zone(),
            repeat_delay: default_repeat_delay(),
            toggle_key: default_toggle_key(),
            validate_key: default_validate_key(),
            next_panel_key: default_next_panel_key(),
            previous_panel_key: default_previous_panel_key(),
        }
    }
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl OverlayConfig {
    /// Overlay style built from these settings
    pub fn style(&self) -> OverlayStyle {
        OverlayStyle {
            title: TextStyle {
                font_size: self.title_font_size,
            },
            item: TextStyle {
                font_size: self.item_font_size,
            },
            spacing: self.spacing,
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\DebugMenu\config`
/// On macOS: `~/Library/Application Support/io.debugmenu.DebugMenu`
/// On Linux: `~/.config/DebugMenu`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.debugmenu", "", "DebugMenu")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from disk.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default config: {}", e);
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_toml_str(&content)
}

/// Parses a configuration from TOML text
pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Validate value ranges and key bindings.
///
/// Returns a list of warning messages; an empty list means the config is
/// usable as-is.
pub fn validate(config: &Config) -> Vec<String> {
    use hashbrown::HashSet;
    let mut warnings = Vec::new();

    let overlay = &config.overlay;
    for (value, name) in [
        (overlay.title_font_size, "overlay.title_font_size"),
        (overlay.item_font_size, "overlay.item_font_size"),
    ] {
        if !(value.is_finite() && value > 0.0) {
            warnings.push(format!("{} must be positive, got {}", name, value));
        }
    }
    if !(overlay.spacing.is_finite() && overlay.spacing >= 0.0) {
        warnings.push(format!(
            "overlay.spacing must not be negative, got {}",
            overlay.spacing
        ));
    }

    let input = &config.input;
    if !(0.0..1.0).contains(&input.axis_dead_zone) {
        warnings.push(format!(
            "input.axis_dead_zone must be in [0, 1), got {}",
            input.axis_dead_zone
        ));
    }
    if !(input.repeat_delay.is_finite() && input.repeat_delay > 0.0) {
        warnings.push(format!(
            "input.repeat_delay must be positive, got {}",
            input.repeat_delay
        ));
    }

    let mut used_keys: HashSet<String> = HashSet::new();
    let keys = [
        (&input.toggle_key, "input.toggle_key"),
        (&input.validate_key, "input.validate_key"),
        (&input.next_panel_key, "input.next_panel_key"),
        (&input.previous_panel_key, "input.previous_panel_key"),
    ];
    for (key, name) in keys {
        if key.trim().is_empty() {
            warnings.push(format!("{} is empty", name));
            continue;
        }
        if !used_keys.insert(key.to_uppercase()) {
            warnings.push(format!(
                "{} key '{}' conflicts with another binding",
                name, key
            ));
        }
    }

    warnings
}
