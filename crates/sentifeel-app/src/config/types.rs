//! Configuration types for SentiFeel
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings` and its enums (`ThemeMode`, `IconMode`)
//!
//! The debounce interval and classification thresholds are fixed and have no
//! settings.

use serde::{Deserialize, Serialize};

/// Global application settings (from config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// Color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Plain Unicode glyphs that render in any terminal
    #[default]
    Unicode,
    /// Nerd Font glyphs (requires a patched font)
    NerdFonts,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Initial color scheme
    #[serde(default)]
    pub theme: ThemeMode,

    /// Icon style
    #[serde(default)]
    pub icons: IconMode,

    /// Ease the confidence bar toward new values
    #[serde(default = "default_true")]
    pub animations: bool,

    /// Show the "Analysis Details" card
    #[serde(default = "default_true")]
    pub show_details: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            icons: IconMode::default(),
            animations: true,
            show_details: true,
        }
    }
}

fn default_true() -> bool {
    true
}
