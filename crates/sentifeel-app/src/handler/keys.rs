//! Key event handlers for the focused control

use crate::input_key::InputKey;
use crate::message::Message;
use crate::presets::Preset;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => return Some(Message::Quit),
        InputKey::CharCtrl('t') => return Some(Message::ToggleTheme),
        InputKey::CharCtrl('u') => return Some(Message::ClearText),
        InputKey::F(n) => return Preset::from_function_key(n).map(Message::ApplyPreset),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        _ => {}
    }

    match state.focus {
        Focus::Input => handle_key_input(key),
        Focus::Preset(_) => handle_key_preset(key),
    }
}

/// Keys while the text area is focused
fn handle_key_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        InputKey::Enter => Some(Message::InsertNewline),
        InputKey::Backspace => Some(Message::DeleteBackward),
        InputKey::Delete => Some(Message::DeleteForward),
        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Home => Some(Message::CursorHome),
        InputKey::End => Some(Message::CursorEnd),
        _ => None,
    }
}

/// Keys while one of the preset buttons is focused
fn handle_key_preset(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFocused),
        InputKey::Right | InputKey::Down => Some(Message::FocusNext),
        InputKey::Left | InputKey::Up => Some(Message::FocusPrevious),
        _ => None,
    }
}
