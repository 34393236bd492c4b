//! Footer with key hints and the tagline

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette::Palette, styles};

pub const TAGLINE: &str = "Advanced AI-powered sentiment analysis";

const KEY_HINTS: [(&str, &str); 5] = [
    ("Tab", "focus"),
    ("F1-F3", "presets"),
    ("^U", "clear"),
    ("^T", "theme"),
    ("Esc", "quit"),
];

pub struct Footer {
    palette: Palette,
    icons: IconSet,
}

impl Footer {
    pub fn new(palette: Palette, icons: IconSet) -> Self {
        Self { palette, icons }
    }

    fn hints(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted(&self.palette)));
            }
            spans.push(Span::styled(*key, styles::keybinding(&self.palette)));
            spans.push(Span::styled(
                format!(" {}", action),
                styles::text_muted(&self.palette),
            ));
        }
        Line::from(spans)
    }

    fn tagline(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.icons.heart(), styles::accent_bold(&self.palette)),
            Span::raw(" "),
            Span::styled(TAGLINE, styles::text_muted(&self.palette)),
            Span::raw(" "),
        ])
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let hints = self.hints();
        let tagline = self.tagline();

        // Hints are dropped first when both don't fit
        if hints.width() + tagline.width() <= area.width as usize {
            buf.set_line(area.x, area.y, &hints, area.width);
        }
        Paragraph::new(tagline)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
