//! Settings parser for config.toml

use super::types::Settings;
use sentifeel_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "sentifeel";

const DEFAULT_CONFIG: &str = r#"# SentiFeel Configuration

[ui]
# Color scheme: "dark" or "light" (Ctrl+T toggles at runtime)
theme = "dark"

# Icon style: "unicode" or "nerd_fonts"
icons = "unicode"

# Ease the confidence bar toward new values
animations = true

# Show the "Analysis Details" card
show_details = true
"#;

/// `<config_dir>/sentifeel/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path, or from the default location
///
/// An explicit path that doesn't exist is an error; a missing default file
/// is not.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) if !path.exists() => Err(Error::config_not_found(path)),
        Some(path) => Ok(load_settings(path)),
        None => Ok(default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default()),
    }
}

/// Write a commented default config file if none exists yet
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        debug!("Config already exists at {:?}", config_path);
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {:?}", parent))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IconMode, ThemeMode};
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        let config = r#"
[ui]
theme = "light"
icons = "nerd_fonts"
animations = false
show_details = false
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.ui.theme, ThemeMode::Light);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(!settings.ui.animations);
        assert!(!settings.ui.show_details);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        std::fs::write(&path, "not valid toml {{{{").unwrap();

        // Should return defaults
        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_unknown_theme_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ntheme = \"sepia\"\n").unwrap();

        assert_eq!(load_settings(&path).ui.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_resolve_settings_missing_explicit_path_errors() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.toml");

        let err = resolve_settings(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_resolve_settings_explicit_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[ui]\nanimations = false\n").unwrap();

        let settings = resolve_settings(Some(&path)).unwrap();
        assert!(!settings.ui.animations);
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sentifeel").join(CONFIG_FILENAME);

        init_config_file(&path).unwrap();

        assert!(path.exists());
        // Content should be valid TOML matching the defaults
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ntheme = \"light\"\n").unwrap();

        init_config_file(&path).unwrap();

        // Existing file is left untouched
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("light"));
    }

    #[test]
    fn test_init_config_file_unwritable_dir_is_io_error() {
        let temp = tempdir().unwrap();
        // A regular file where the config directory should go
        let blocker = temp.path().join("sentifeel");
        std::fs::write(&blocker, "").unwrap();

        let err = init_config_file(&blocker.join(CONFIG_FILENAME)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
