//! sentifeel-app - Application state and orchestration for SentiFeel
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction that owns the debounce timer and the scorer, and
//! configuration loading.

pub mod actions;
pub mod animation;
pub mod config;
pub mod debounce;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod presets;
pub mod process;
pub mod signals;
pub mod state;
pub mod text_input;

// Re-export primary types
pub use debounce::{Debouncer, ANALYSIS_DEBOUNCE};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use presets::Preset;
pub use state::{AppPhase, AppState, Focus};
