//! Text area with placeholder, cursor and character/word counters

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use sentifeel_app::text_input::TextInput;
use sentifeel_core::TextStats;

use crate::theme::{palette::Palette, styles};

pub const INPUT_LABEL: &str = " Enter your text to analyze ";
pub const PLACEHOLDER: &str = "Type something to see how it feels...";

/// Text broken into display rows no wider than the area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    pub rows: Vec<String>,
    /// (row, column) of the cursor in display cells
    pub cursor: (usize, u16),
}

/// Hard-wrap `text` at `width` display cells, honoring explicit newlines,
/// and locate the cursor (a char index) in the result.
pub fn wrap_text(text: &str, cursor: usize, width: u16) -> WrappedText {
    let width = width.max(1);
    let mut rows = vec![String::new()];
    let mut row_width: u16 = 0;
    let mut cursor_at = None;

    for (i, c) in text.chars().enumerate() {
        if c == '\n' {
            if i == cursor {
                cursor_at = Some((rows.len() - 1, row_width));
            }
            rows.push(String::new());
            row_width = 0;
            continue;
        }

        let w = c.width().unwrap_or(0) as u16;
        if row_width > 0 && row_width + w > width {
            rows.push(String::new());
            row_width = 0;
        }
        if i == cursor {
            cursor_at = Some((rows.len() - 1, row_width));
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        row_width += w;
    }

    let mut cursor = cursor_at.unwrap_or((rows.len() - 1, row_width));
    // A cursor past the last cell of a full row sits at the start of the next
    if cursor.1 >= width {
        cursor = (cursor.0 + 1, 0);
        if cursor.0 >= rows.len() {
            rows.push(String::new());
        }
    }

    WrappedText { rows, cursor }
}

/// Bordered input panel
pub struct InputPanel<'a> {
    input: &'a TextInput,
    stats: TextStats,
    focused: bool,
    palette: Palette,
}

impl<'a> InputPanel<'a> {
    pub fn new(input: &'a TextInput, palette: Palette) -> Self {
        Self {
            input,
            stats: TextStats::of(input.text()),
            focused: false,
            palette,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for InputPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.palette, self.focused).title(Span::styled(
            INPUT_LABEL,
            if self.focused {
                styles::accent_bold(&self.palette)
            } else {
                styles::text_secondary(&self.palette)
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_style(inner, Style::default().bg(self.palette.input_bg));

        // Bottom row holds the counters when there is room for text above it
        let (text_area, counter_row) = if inner.height >= 2 {
            (
                Rect {
                    height: inner.height - 1,
                    ..inner
                },
                Some(Rect {
                    y: inner.y + inner.height - 1,
                    height: 1,
                    ..inner
                }),
            )
        } else {
            (inner, None)
        };

        if self.input.is_empty() {
            buf.set_stringn(
                text_area.x,
                text_area.y,
                PLACEHOLDER,
                text_area.width as usize,
                styles::text_muted(&self.palette).add_modifier(Modifier::ITALIC),
            );
            if self.focused {
                draw_cursor(buf, text_area.x, text_area.y);
            }
        } else {
            self.render_text(text_area, buf);
        }

        if let Some(row) = counter_row {
            let counters = Line::from(vec![
                Span::styled(
                    format!("{} characters", self.stats.characters),
                    styles::text_muted(&self.palette),
                ),
                Span::styled(" · ", styles::text_muted(&self.palette)),
                Span::styled(
                    format!("{} words", self.stats.words),
                    styles::text_muted(&self.palette),
                ),
                Span::raw(" "),
            ]);
            Paragraph::new(counters)
                .alignment(Alignment::Right)
                .render(row, buf);
        }
    }
}

impl InputPanel<'_> {
    fn render_text(&self, area: Rect, buf: &mut Buffer) {
        let wrapped = wrap_text(self.input.text(), self.input.cursor(), area.width);
        let visible = area.height as usize;

        // Scroll so the cursor row stays on screen
        let (cursor_row, cursor_col) = wrapped.cursor;
        let first = (cursor_row + 1).saturating_sub(visible);

        let style = styles::text_primary(&self.palette);
        for (offset, row) in wrapped.rows.iter().skip(first).take(visible).enumerate() {
            buf.set_stringn(
                area.x,
                area.y + offset as u16,
                row,
                area.width as usize,
                style,
            );
        }

        if self.focused {
            let y = area.y + (cursor_row - first) as u16;
            draw_cursor(buf, area.x + cursor_col, y);
        }
    }
}

fn draw_cursor(buf: &mut Buffer, x: u16, y: u16) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
    }
}
