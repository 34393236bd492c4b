//! "Analysis Details" card shown under the result

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use sentifeel_core::{emotion_glyph, SentimentResult};

use crate::theme::{
    palette::{Gradient, Palette},
    styles,
};

pub const DETAILS_TITLE: &str = " Analysis Details ";

/// Emotion, accuracy and raw score of the current result.
/// Draws only its frame while there is no label.
pub struct DetailsCard<'a> {
    result: &'a SentimentResult,
    palette: Palette,
}

impl<'a> DetailsCard<'a> {
    pub fn new(result: &'a SentimentResult, palette: Palette) -> Self {
        Self { result, palette }
    }
}

impl Widget for DetailsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.palette, false)
            .title(Span::styled(DETAILS_TITLE, styles::text_secondary(&self.palette)));
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.result.has_label() || inner.height == 0 || inner.width < 2 {
            return;
        }

        let x = inner.x + 1;
        let width = inner.width - 1;
        let caption = |text: &'static str| Span::styled(text, styles::text_muted(&self.palette));
        let value_style = Style::default()
            .fg(Gradient::for_label(self.result.label).start())
            .add_modifier(Modifier::BOLD);

        let emotion = Line::from(vec![
            caption("Emotion   "),
            Span::raw(emotion_glyph(self.result.label)),
            Span::raw(" "),
            Span::styled(self.result.label.display_name(), value_style),
        ]);
        buf.set_line(x, inner.y, &emotion, width);

        if inner.height >= 2 {
            let accuracy = Line::from(vec![
                caption("Accuracy  "),
                Span::styled(format!("{}%", self.result.percent()), value_style),
                Span::raw(" "),
                caption("Score"),
            ]);
            buf.set_line(x, inner.y + 1, &accuracy, width);
        }

        if inner.height >= 3 {
            let raw = match self.result.score {
                Some(score) => format!("{:+.3}", score),
                None => "n/a".to_string(),
            };
            let polarity = Line::from(vec![
                caption("Polarity  "),
                Span::styled(raw, styles::text_secondary(&self.palette)),
            ]);
            buf.set_line(x, inner.y + 2, &polarity, width);
        }
    }
}
