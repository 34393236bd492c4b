//! Configuration file parsing for SentiFeel
//!
//! Supports:
//! - `<config_dir>/sentifeel/config.toml` - Global settings
//! - an explicit path passed with `--config`

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, resolve_settings};
pub use types::*;
