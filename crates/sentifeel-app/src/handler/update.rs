//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tracing::{debug, info};

use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};

use super::{input, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.confidence_animation.tick(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Text Input Messages
        // ─────────────────────────────────────────────────────────
        Message::TextChanged(text) => input::handle_edit(state, |i| i.set_text(text)),
        Message::InsertChar(c) => input::handle_edit(state, |i| i.insert_char(c)),
        Message::InsertNewline => input::handle_edit(state, |i| i.insert_char('\n')),
        Message::DeleteBackward => input::handle_edit(state, |i| i.delete_backward()),
        Message::DeleteForward => input::handle_edit(state, |i| i.delete_forward()),
        Message::ClearText => input::handle_edit(state, |i| i.clear()),
        Message::CursorLeft => {
            state.input.move_left();
            UpdateResult::none()
        }
        Message::CursorRight => {
            state.input.move_right();
            UpdateResult::none()
        }
        Message::CursorHome => {
            state.input.move_home();
            UpdateResult::none()
        }
        Message::CursorEnd => {
            state.input.move_end();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Preset / Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::ApplyPreset(preset) => {
            debug!("Applying {:?} preset", preset);
            // Same pipeline as typing, including the debounce window
            UpdateResult::message(Message::TextChanged(preset.text().to_string()))
        }

        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        Message::ActivateFocused => match state.focus {
            Focus::Preset(preset) => UpdateResult::message(Message::ApplyPreset(preset)),
            Focus::Input => UpdateResult::none(),
        },

        Message::ToggleTheme => {
            state.toggle_theme();
            info!("Theme switched to {:?}", state.theme);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis Messages
        // ─────────────────────────────────────────────────────────
        Message::AnalysisDue { generation } => {
            if !state.take_due(generation) {
                debug!("Ignoring stale debounce firing (generation {})", generation);
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::RunAnalysis {
                generation,
                text: state.text().to_string(),
            })
        }

        Message::AnalysisCompleted { generation, result } => {
            if !state.is_current(generation) {
                debug!("Discarding result for superseded generation {}", generation);
                return UpdateResult::none();
            }
            state.apply_result(result, Instant::now());
            UpdateResult::none()
        }
    }
}
