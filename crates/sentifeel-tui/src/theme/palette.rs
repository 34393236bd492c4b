//! Color palettes for the dark and light themes, plus the per-label
//! gradients drawn by the result card and confidence bar.

use ratatui::style::Color;
use sentifeel_app::config::ThemeMode;
use sentifeel_core::Label;

/// Colors that change with the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub input_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub contrast_fg: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),     // gray-900
    card_bg: Color::Rgb(31, 41, 55),        // gray-800
    input_bg: Color::Rgb(55, 65, 81),       // gray-700
    border_dim: Color::Rgb(75, 85, 99),     // gray-600
    border_active: Color::Rgb(167, 139, 250), // violet-400
    accent: Color::Rgb(167, 139, 250),
    text_primary: Color::Rgb(243, 244, 246), // gray-100
    text_secondary: Color::Rgb(209, 213, 219), // gray-300
    text_muted: Color::Rgb(156, 163, 175),   // gray-400
    contrast_fg: Color::Rgb(17, 24, 39),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(249, 250, 251),  // gray-50
    card_bg: Color::Rgb(255, 255, 255),
    input_bg: Color::Rgb(243, 244, 246),    // gray-100
    border_dim: Color::Rgb(209, 213, 219),  // gray-300
    border_active: Color::Rgb(124, 58, 237), // violet-600
    accent: Color::Rgb(124, 58, 237),
    text_primary: Color::Rgb(17, 24, 39),   // gray-900
    text_secondary: Color::Rgb(75, 85, 99), // gray-600
    text_muted: Color::Rgb(107, 114, 128),  // gray-500
    contrast_fg: Color::Rgb(255, 255, 255),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }
}

/// Start and end color of a label's gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: (u8, u8, u8),
    pub to: (u8, u8, u8),
}

// --- Label gradients ---
pub const POSITIVE_GRADIENT: Gradient = Gradient {
    from: (74, 222, 128), // green-400
    to: (5, 150, 105),    // emerald-600
};
pub const NEGATIVE_GRADIENT: Gradient = Gradient {
    from: (248, 113, 113), // red-400
    to: (225, 29, 72),     // rose-600
};
pub const NEUTRAL_GRADIENT: Gradient = Gradient {
    from: (250, 204, 21), // yellow-400
    to: (249, 115, 22),   // orange-500
};
pub const NONE_GRADIENT: Gradient = Gradient {
    from: (156, 163, 175), // gray-400
    to: (75, 85, 99),      // gray-600
};

impl Gradient {
    pub fn for_label(label: Label) -> Self {
        match label {
            Label::Positive => POSITIVE_GRADIENT,
            Label::Negative => NEGATIVE_GRADIENT,
            Label::Neutral => NEUTRAL_GRADIENT,
            Label::None => NONE_GRADIENT,
        }
    }

    pub fn start(&self) -> Color {
        rgb(self.from)
    }

    pub fn end(&self) -> Color {
        rgb(self.to)
    }

    /// Color at `t` along the gradient, `t` clamped to `[0, 1]`
    pub fn at(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(
            mix(self.from.0, self.to.0),
            mix(self.from.1, self.to.1),
            mix(self.from.2, self.to.2),
        )
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_for_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Dark), DARK);
        assert_eq!(Palette::for_mode(ThemeMode::Light), LIGHT);
        assert_ne!(DARK.background, LIGHT.background);
    }

    #[test]
    fn test_gradient_per_label() {
        assert_eq!(
            Gradient::for_label(Label::Positive).start(),
            Color::Rgb(74, 222, 128)
        );
        assert_eq!(
            Gradient::for_label(Label::Negative).end(),
            Color::Rgb(225, 29, 72)
        );
        assert_eq!(
            Gradient::for_label(Label::Neutral).start(),
            Color::Rgb(250, 204, 21)
        );
        assert_eq!(
            Gradient::for_label(Label::None).end(),
            Color::Rgb(75, 85, 99)
        );
    }

    #[test]
    fn test_gradient_endpoints_and_clamping() {
        let g = POSITIVE_GRADIENT;
        assert_eq!(g.at(0.0), g.start());
        assert_eq!(g.at(1.0), g.end());
        assert_eq!(g.at(-3.0), g.start());
        assert_eq!(g.at(7.0), g.end());
    }

    #[test]
    fn test_gradient_midpoint() {
        let g = Gradient {
            from: (0, 100, 200),
            to: (100, 200, 0),
        };
        assert_eq!(g.at(0.5), Color::Rgb(50, 150, 100));
    }
}
