//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::presets::Preset;
use sentifeel_core::SentimentResult;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (animations)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Text Input Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the whole input text (paste, headless input)
    TextChanged(String),
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a line break at the cursor
    InsertNewline,
    /// Delete the character before the cursor
    DeleteBackward,
    /// Delete the character under the cursor
    DeleteForward,
    CursorLeft,
    CursorRight,
    /// Start of the current line
    CursorHome,
    /// End of the current line
    CursorEnd,
    /// Empty the input
    ClearText,

    // ─────────────────────────────────────────────────────────
    // Preset / Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Overwrite the input with a canned example
    ApplyPreset(Preset),
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrevious,
    /// Press the focused preset button
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // Theme Messages
    // ─────────────────────────────────────────────────────────
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Analysis Messages
    // ─────────────────────────────────────────────────────────
    /// The debounce window for `generation` elapsed
    AnalysisDue { generation: u64 },
    /// The scorer adapter finished for `generation`
    AnalysisCompleted {
        generation: u64,
        result: SentimentResult,
    },
}
