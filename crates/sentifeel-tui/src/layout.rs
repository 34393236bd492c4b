//! Screen layout definitions for the TUI
//!
//! Two columns (editor left, results right) when the terminal is at least
//! [`WIDE_LAYOUT_MIN_WIDTH`] columns wide; stacked otherwise.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminal width at which the two-column layout kicks in
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

const HEADER_HEIGHT: u16 = 4; // borders + title row + subtitle row
const FOOTER_HEIGHT: u16 = 1;
const PRESET_BAR_HEIGHT: u16 = 3;
const RESULT_CARD_HEIGHT: u16 = 8;
const DETAILS_CARD_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Text area with its counters
    pub input: Rect,
    pub presets: Rect,
    pub result: Rect,
    /// `None` when the details card is disabled
    pub details: Option<Rect>,
    pub footer: Rect,
}

/// Whether `area` is wide enough for two columns
pub fn is_wide(area: Rect) -> bool {
    area.width >= WIDE_LAYOUT_MIN_WIDTH
}

/// Split the screen into its panels
pub fn create(area: Rect, show_details: bool) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    if is_wide(area) {
        wide(header, body, footer, show_details)
    } else {
        stacked(header, body, footer, show_details)
    }
}

fn wide(header: Rect, body: Rect, footer: Rect, show_details: bool) -> ScreenAreas {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);

    let [input, presets] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(PRESET_BAR_HEIGHT)]).areas(left);

    let details_height = if show_details { DETAILS_CARD_HEIGHT } else { 0 };
    let [result, details, _rest] = Layout::vertical([
        Constraint::Length(RESULT_CARD_HEIGHT),
        Constraint::Length(details_height),
        Constraint::Min(0),
    ])
    .areas(right);

    ScreenAreas {
        header,
        input,
        presets,
        result,
        details: show_details.then_some(details),
        footer,
    }
}

fn stacked(header: Rect, body: Rect, footer: Rect, show_details: bool) -> ScreenAreas {
    let [input, presets, cards] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(PRESET_BAR_HEIGHT),
        Constraint::Length(RESULT_CARD_HEIGHT),
    ])
    .areas(body);

    let (result, details) = if show_details {
        let [result, details] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(cards);
        (result, Some(details))
    } else {
        (cards, None)
    };

    ScreenAreas {
        header,
        input,
        presets,
        result,
        details,
        footer,
    }
}
