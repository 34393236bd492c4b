//! Header with the app title, subtitle and theme indicator

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sentifeel_app::config::ThemeMode;

use crate::theme::{icons::IconSet, palette::Palette, styles};

pub const TITLE: &str = "SentiFeel";
pub const SUBTITLE: &str = "Discover the emotion in your words";

/// Main header; the title takes the start color of the current gradient
pub struct MainHeader {
    palette: Palette,
    icons: IconSet,
    theme: ThemeMode,
    title_color: Color,
}

impl MainHeader {
    pub fn new(palette: Palette, icons: IconSet, theme: ThemeMode, title_color: Color) -> Self {
        Self {
            palette,
            icons,
            theme,
            title_color,
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(&self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let theme_name = if self.theme.is_dark() { "Dark" } else { "Light" };
        let indicator = Line::from(vec![
            Span::styled(self.icons.theme(self.theme), styles::accent_bold(&self.palette)),
            Span::raw(" "),
            Span::styled(theme_name, styles::text_muted(&self.palette)),
            Span::raw(" "),
        ]);
        let title_row = Rect { height: 1, ..inner };
        Paragraph::new(indicator)
            .alignment(Alignment::Right)
            .render(title_row, buf);

        if inner.height >= 2 {
            let subtitle = Line::from(vec![
                Span::raw(" "),
                Span::styled(SUBTITLE, styles::text_secondary(&self.palette)),
            ]);
            buf.set_line(inner.x, inner.y + 1, &subtitle, inner.width);
        }
    }
}
