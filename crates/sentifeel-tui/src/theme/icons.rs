//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use sentifeel_app::config::{IconMode, ThemeMode};
use sentifeel_app::Preset;
use sentifeel_core::Label;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn smile(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f118}", // nf-fa-smile_o
            IconMode::Unicode => "\u{263a}",   // ☺
        }
    }

    pub fn frown(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f119}", // nf-fa-frown_o
            IconMode::Unicode => "\u{2639}",   // ☹
        }
    }

    pub fn meh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f11a}", // nf-fa-meh_o
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }

    pub fn thumbs_up(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f164}", // nf-fa-thumbs_up
            IconMode::Unicode => "+",
        }
    }

    pub fn thumbs_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f165}", // nf-fa-thumbs_down
            IconMode::Unicode => "-",
        }
    }

    pub fn zap(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e7}", // nf-fa-bolt
            IconMode::Unicode => "~",
        }
    }

    pub fn heart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f004}", // nf-fa-heart
            IconMode::Unicode => "\u{2665}",   // ♥
        }
    }

    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f185}", // nf-fa-sun_o
            IconMode::Unicode => "\u{263c}",   // ☼
        }
    }

    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f186}", // nf-fa-moon_o
            IconMode::Unicode => "\u{263e}",   // ☾
        }
    }

    /// Badge shown beside the label in the result card
    pub fn label_badge(&self, label: Label) -> &'static str {
        match label {
            Label::Positive => self.smile(),
            Label::Negative => self.frown(),
            Label::Neutral | Label::None => self.meh(),
        }
    }

    pub fn preset(&self, preset: Preset) -> &'static str {
        match preset {
            Preset::Positive => self.thumbs_up(),
            Preset::Negative => self.thumbs_down(),
            Preset::Neutral => self.zap(),
        }
    }

    /// Indicator for the theme that is currently active
    pub fn theme(&self, theme: ThemeMode) -> &'static str {
        match theme {
            ThemeMode::Dark => self.moon(),
            ThemeMode::Light => self.sun(),
        }
    }
}
