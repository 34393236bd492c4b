//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use sentifeel_app::{AppState, Focus};

use crate::layout;
use crate::theme::{
    icons::IconSet,
    palette::{Gradient, Palette},
};
use crate::widgets;

/// Render the complete UI (View in TEA)
///
/// Pure function of the state: input text, latest result, animated
/// confidence, focus and theme.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.theme);
    let icons = IconSet::new(state.settings.ui.icons);
    let gradient = Gradient::for_label(state.result.label);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area, state.settings.ui.show_details);

    frame.render_widget(
        widgets::MainHeader::new(palette, icons, state.theme, gradient.start()),
        areas.header,
    );

    frame.render_widget(
        widgets::InputPanel::new(&state.input, palette).focused(state.focus == Focus::Input),
        areas.input,
    );

    frame.render_widget(
        widgets::PresetBar::new(state.focus, palette, icons),
        areas.presets,
    );

    frame.render_widget(
        widgets::ResultCard::new(&state.result, state.displayed_confidence(), palette, icons),
        areas.result,
    );

    if let Some(details) = areas.details {
        frame.render_widget(widgets::DetailsCard::new(&state.result, palette), details);
    }

    frame.render_widget(widgets::Footer::new(palette, icons), areas.footer);
}
