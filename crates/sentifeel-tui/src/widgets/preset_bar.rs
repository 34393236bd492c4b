//! Row of preset buttons ("Try Positive" etc.)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sentifeel_app::{Focus, Preset};

use crate::theme::{icons::IconSet, palette::Palette, styles};

/// Three buttons; the focused one is highlighted
pub struct PresetBar {
    focus: Focus,
    palette: Palette,
    icons: IconSet,
}

impl PresetBar {
    pub fn new(focus: Focus, palette: Palette, icons: IconSet) -> Self {
        Self {
            focus,
            palette,
            icons,
        }
    }

    fn button(&self, preset: Preset) -> Paragraph<'static> {
        let focused = self.focus == Focus::Preset(preset);
        let base = if focused {
            styles::focused_selected(&self.palette)
        } else {
            styles::text_primary(&self.palette)
        };
        let hint = if focused {
            base
        } else {
            styles::keybinding(&self.palette)
        };

        let line = Line::from(vec![
            Span::styled(self.icons.preset(preset), base),
            Span::styled(" ", base),
            Span::styled(preset.button_label(), base),
            Span::styled(format!(" F{}", preset.function_key()), hint),
        ]);
        Paragraph::new(line)
            .style(if focused { base } else { Style::default() })
            .centered()
    }
}

impl Widget for PresetBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(self.focus, Focus::Preset(_));
        let block = styles::card_block(&self.palette, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
        for (preset, cell) in Preset::ALL.into_iter().zip(cells.iter()) {
            self.button(preset).render(*cell, buf);
        }
    }
}
