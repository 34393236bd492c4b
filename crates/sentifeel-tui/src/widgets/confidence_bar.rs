//! Horizontal bar filled with the label gradient up to the confidence value

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::theme::palette::Gradient;

const FILLED: &str = "█";
const TRACK: &str = "░";

/// Gradient bar; `value` is clamped to `[0, 1]`
pub struct ConfidenceBar {
    value: f64,
    gradient: Gradient,
    track: Color,
}

impl ConfidenceBar {
    pub fn new(value: f64, gradient: Gradient, track: Color) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            gradient,
            track,
        }
    }

    /// Number of filled cells for a bar `width` cells wide
    pub fn filled_cells(&self, width: u16) -> u16 {
        (self.value * width as f64).round() as u16
    }
}

impl Widget for ConfidenceBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let filled = self.filled_cells(area.width);
        let span = area.width.saturating_sub(1).max(1) as f64;

        for dx in 0..area.width {
            let Some(cell) = buf.cell_mut((area.x + dx, area.y)) else {
                continue;
            };
            if dx < filled {
                cell.set_symbol(FILLED)
                    .set_fg(self.gradient.at(dx as f64 / span));
            } else {
                cell.set_symbol(TRACK).set_fg(self.track);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::POSITIVE_GRADIENT;

    fn filled_count(term: &TestTerminal, width: u16) -> usize {
        (0..width)
            .filter(|&x| term.buffer()[(x, 0)].symbol() == FILLED)
            .count()
    }

    #[test]
    fn test_fill_proportional_to_value() {
        let mut term = TestTerminal::with_size(20, 1);
        term.render_widget(
            ConfidenceBar::new(0.5, POSITIVE_GRADIENT, Color::Gray),
            Rect::new(0, 0, 20, 1),
        );
        assert_eq!(filled_count(&term, 20), 10);
    }

    #[test]
    fn test_value_is_clamped() {
        let bar = ConfidenceBar::new(1.7, POSITIVE_GRADIENT, Color::Gray);
        assert_eq!(bar.filled_cells(30), 30);
        let bar = ConfidenceBar::new(-0.2, POSITIVE_GRADIENT, Color::Gray);
        assert_eq!(bar.filled_cells(30), 0);
    }

    #[test]
    fn test_filled_cells_follow_gradient() {
        let mut term = TestTerminal::with_size(11, 1);
        term.render_widget(
            ConfidenceBar::new(1.0, POSITIVE_GRADIENT, Color::Gray),
            Rect::new(0, 0, 11, 1),
        );
        assert_eq!(term.buffer()[(0, 0)].fg, POSITIVE_GRADIENT.start());
        assert_eq!(term.buffer()[(10, 0)].fg, POSITIVE_GRADIENT.end());
    }

    #[test]
    fn test_empty_bar_is_all_track() {
        let mut term = TestTerminal::with_size(8, 1);
        term.render_widget(
            ConfidenceBar::new(0.0, POSITIVE_GRADIENT, Color::Gray),
            Rect::new(0, 0, 8, 1),
        );
        assert_eq!(filled_count(&term, 8), 0);
        assert_eq!(term.buffer()[(3, 0)].fg, Color::Gray);
    }
}
