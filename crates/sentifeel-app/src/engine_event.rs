//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use sentifeel_core::SentimentResult;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A debounce window was (re)started for `generation`
    AnalysisScheduled { generation: u64, characters: usize },

    /// A fresh result was applied to the state
    AnalysisCompleted {
        generation: u64,
        result: SentimentResult,
    },

    /// Blank input reset the result without calling the scorer
    ResultCleared,

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Stable snake_case name, used as the `event` field in headless output
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::AnalysisScheduled { .. } => "analysis_scheduled",
            EngineEvent::AnalysisCompleted { .. } => "analysis_completed",
            EngineEvent::ResultCleared => "result_cleared",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
