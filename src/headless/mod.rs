//! Headless mode - NDJSON event output instead of the TUI
//!
//! The text is run through the same debounced Engine pipeline as the TUI;
//! every scheduling and completion is written to stdout as one JSON object
//! per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"analysis_scheduled","generation":1,"characters":23,"debounce_ms":300,"timestamp":1704700001000}
//! {"event":"analysis_completed","generation":1,"label":"positive","confidence":1.0,"percent":100,"score":0.6369,"timestamp":1704700001300}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::Write;

use sentifeel_app::{EngineEvent, ANALYSIS_DEBOUNCE};
use sentifeel_core::{Label, Result, SentimentResult};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A debounce window was started for the input
    AnalysisScheduled {
        generation: u64,
        characters: usize,
        debounce_ms: u64,
        timestamp: i64,
    },

    /// The scorer ran and the result is final
    AnalysisCompleted {
        generation: u64,
        label: Label,
        confidence: f64,
        percent: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        score: Option<f64>,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn analysis_scheduled(generation: u64, characters: usize) -> Self {
        Self::AnalysisScheduled {
            generation,
            characters,
            debounce_ms: ANALYSIS_DEBOUNCE.as_millis() as u64,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(generation: u64, result: &SentimentResult) -> Self {
        Self::AnalysisCompleted {
            generation,
            label: result.label,
            confidence: result.confidence,
            percent: result.percent(),
            score: result.score,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Headless counterpart of an engine event, if it has one
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::AnalysisScheduled {
                generation,
                characters,
            } => Some(Self::analysis_scheduled(*generation, *characters)),
            EngineEvent::AnalysisCompleted { generation, result } => {
                Some(Self::analysis_completed(*generation, result))
            }
            EngineEvent::ResultCleared | EngineEvent::Shutdown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn to_json(event: &HeadlessEvent) -> Value {
        serde_json::to_value(event).unwrap()
    }

    #[test]
    fn test_scheduled_serialization() {
        let json = to_json(&HeadlessEvent::analysis_scheduled(2, 11));

        assert_eq!(json["event"], "analysis_scheduled");
        assert_eq!(json["generation"], 2);
        assert_eq!(json["characters"], 11);
        assert_eq!(json["debounce_ms"], 300);
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn test_completed_serialization() {
        let result = SentimentResult::from_score(0.25);
        let json = to_json(&HeadlessEvent::analysis_completed(1, &result));

        assert_eq!(json["event"], "analysis_completed");
        assert_eq!(json["label"], "positive");
        assert_eq!(json["percent"], 80);
        assert_eq!(json["score"], 0.25);
    }

    #[test]
    fn test_fallback_omits_score() {
        let json = to_json(&HeadlessEvent::analysis_completed(
            1,
            &SentimentResult::fallback(),
        ));

        assert_eq!(json["label"], "neutral");
        assert_eq!(json["confidence"], 0.5);
        assert!(json.get("score").is_none());
    }

    #[test]
    fn test_error_serialization() {
        let json = to_json(&HeadlessEvent::error("No text to analyze", true));
        assert_eq!(json["event"], "error");
        assert_eq!(json["fatal"], true);
    }

    #[test]
    fn test_write_to_emits_one_line() {
        let mut out = Vec::new();
        HeadlessEvent::analysis_scheduled(1, 5)
            .write_to(&mut out)
            .unwrap();
        HeadlessEvent::error("boom", false).write_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(r#"{"event":"analysis_scheduled""#));
        assert!(lines[1].contains(r#""fatal":false"#));
    }

    #[test]
    fn test_engine_event_mapping() {
        let scheduled = EngineEvent::AnalysisScheduled {
            generation: 4,
            characters: 9,
        };
        assert!(matches!(
            HeadlessEvent::from_engine_event(&scheduled),
            Some(HeadlessEvent::AnalysisScheduled {
                generation: 4,
                characters: 9,
                ..
            })
        ));
        assert_eq!(
            HeadlessEvent::from_engine_event(&EngineEvent::ResultCleared),
            None
        );
        assert_eq!(HeadlessEvent::from_engine_event(&EngineEvent::Shutdown), None);
    }
}
