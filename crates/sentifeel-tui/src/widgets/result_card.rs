//! Result card: label badge, emoji and the animated confidence bar

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sentifeel_core::SentimentResult;

use crate::theme::{
    icons::IconSet,
    palette::{Gradient, Palette},
    styles,
};

use super::ConfidenceBar;

pub const EMPTY_PROMPT: &str = "Enter text to analyze";

/// Card describing the latest analysis
pub struct ResultCard<'a> {
    result: &'a SentimentResult,
    /// Animated value drawn by the bar
    displayed_confidence: f64,
    palette: Palette,
    icons: IconSet,
}

impl<'a> ResultCard<'a> {
    pub fn new(
        result: &'a SentimentResult,
        displayed_confidence: f64,
        palette: Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            result,
            displayed_confidence,
            palette,
            icons,
        }
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let gradient = Gradient::for_label(self.result.label);
        let padded = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let row = |n: u16| Rect {
            y: padded.y + n,
            height: 1,
            ..padded
        };

        // Row 0: badge + heading, emoji on the right
        let heading = if self.result.has_label() {
            Span::styled(
                self.result.label.display_name(),
                Style::default()
                    .fg(gradient.start())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(EMPTY_PROMPT, styles::text_muted(&self.palette))
        };
        let title = Line::from(vec![
            Span::styled(
                self.icons.label_badge(self.result.label),
                Style::default().fg(gradient.start()),
            ),
            Span::raw(" "),
            heading,
        ]);
        buf.set_line(padded.x, padded.y, &title, padded.width);
        if self.result.has_label() {
            Paragraph::new(self.result.emoji())
                .alignment(Alignment::Right)
                .render(row(0), buf);
        }

        if !self.result.has_label() || inner.height < 5 {
            return;
        }

        // Rows 2-4: confidence caption, bar, descriptor
        let caption = Line::from(Span::styled(
            "Confidence",
            styles::text_secondary(&self.palette),
        ));
        buf.set_line(padded.x, padded.y + 2, &caption, padded.width);
        Paragraph::new(Span::styled(
            format!("{}%", self.result.percent()),
            Style::default()
                .fg(gradient.start())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .render(row(2), buf);

        ConfidenceBar::new(self.displayed_confidence, gradient, self.palette.border_dim)
            .render(row(3), buf);

        buf.set_stringn(
            padded.x,
            padded.y + 4,
            self.result.level().description(),
            padded.width as usize,
            styles::text_muted(&self.palette),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use sentifeel_app::config::IconMode;

    fn render(result: &SentimentResult, displayed: f64) -> TestTerminal {
        let mut term = TestTerminal::with_size(50, 8);
        term.render_widget(
            ResultCard::new(result, displayed, DARK, IconSet::new(IconMode::Unicode)),
            Rect::new(0, 0, 50, 8),
        );
        term
    }

    #[test]
    fn test_empty_result_prompts_for_text() {
        let term = render(&SentimentResult::none(), 0.0);
        assert!(term.buffer_contains(EMPTY_PROMPT));
        assert!(!term.buffer_contains("Confidence"));
    }

    #[test]
    fn test_positive_high_confidence() {
        let result = SentimentResult::from_score(0.7);
        let term = render(&result, 1.0);

        assert!(term.buffer_contains("Positive"));
        assert!(term.buffer_contains("🎉"));
        assert!(term.buffer_contains("Confidence"));
        assert!(term.buffer_contains("100%"));
        assert!(term.buffer_contains("Very confident"));
    }

    #[test]
    fn test_negative_medium_confidence() {
        // 0.2 * 2 + 0.3 = 0.7
        let result = SentimentResult::from_score(-0.2);
        let term = render(&result, 0.7);

        assert!(term.buffer_contains("Negative"));
        assert!(term.buffer_contains("😕"));
        assert!(term.buffer_contains("70%"));
        assert!(term.buffer_contains("Moderately confident"));
    }

    #[test]
    fn test_fallback_result_is_low_confidence_neutral() {
        let term = render(&SentimentResult::fallback(), 0.5);

        assert!(term.buffer_contains("Neutral"));
        assert!(term.buffer_contains("🤷"));
        assert!(term.buffer_contains("50%"));
        assert!(term.buffer_contains("Low confidence"));
    }
}
