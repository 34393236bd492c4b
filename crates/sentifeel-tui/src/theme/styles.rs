//! Semantic style builders, parameterized by the active palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border_dim)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.border_active)
}

// --- Accent styles ---
pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Key hint in the footer and on preset buttons
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

/// Focused button: contrast text on the accent color
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn card_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
        .style(Style::default().bg(p.card_bg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_focused_block_uses_active_border() {
        // Border style differs between focused and unfocused
        assert_ne!(border_active(&DARK), border_inactive(&DARK));
    }

    #[test]
    fn test_styles_follow_palette() {
        assert_eq!(text_primary(&DARK).fg, Some(DARK.text_primary));
        assert_eq!(text_primary(&LIGHT).fg, Some(LIGHT.text_primary));
        assert_eq!(focused_selected(&LIGHT).bg, Some(LIGHT.accent));
    }
}
