//! Theme system for the SentiFeel TUI.
//!
//! This module provides:
//! - `palette` - Dark/light color tables and the per-label gradients
//! - `styles` - Semantic style builder functions
//! - `icons` - Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
