//! Text editing handlers and analysis scheduling

use sentifeel_core::is_blank;
use tracing::debug;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Apply an edit to the input; reschedule analysis only if the text changed
pub(crate) fn handle_edit<F>(state: &mut AppState, edit: F) -> UpdateResult
where
    F: FnOnce(&mut crate::text_input::TextInput) -> bool,
{
    if edit(&mut state.input) {
        on_text_changed(state)
    } else {
        UpdateResult::none()
    }
}

/// Debounce entry point: every text change lands here.
///
/// Blank text clears the result at once and cancels any pending timer;
/// anything else (re)starts the debounce window.
pub(crate) fn on_text_changed(state: &mut AppState) -> UpdateResult {
    if is_blank(state.input.text()) {
        let had_pending = state.clear_result();
        debug!("Input blank, result cleared");
        return if had_pending {
            UpdateResult::action(UpdateAction::CancelAnalysis)
        } else {
            UpdateResult::none()
        };
    }

    let generation = state.schedule_analysis();
    UpdateResult::action(UpdateAction::ScheduleAnalysis { generation })
}
