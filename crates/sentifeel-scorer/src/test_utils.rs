//! Deterministic scorers for tests
//!
//! Enabled with the `test-helpers` feature so downstream crates can drive the
//! analysis pipeline without the real lexicon.

use std::sync::{Arc, Mutex};

use crate::scorer::{ScoreReport, Scorer, ScorerError};

/// Always returns the same normalized score
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer {
    score: f64,
}

impl FixedScorer {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _text: &str) -> Result<ScoreReport, ScorerError> {
        Ok(ScoreReport::normalized(self.score))
    }
}

/// Always errors
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingScorer;

impl Scorer for FailingScorer {
    fn score(&self, _text: &str) -> Result<ScoreReport, ScorerError> {
        Err(ScorerError::rejected("failing scorer"))
    }
}

/// Records every text it is asked to score, then scores by keyword:
/// "good" → 0.6, "bad" → -0.6, anything else → 0.0.
///
/// Clones share the same call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingScorer {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts scored so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

impl Scorer for RecordingScorer {
    fn score(&self, text: &str) -> Result<ScoreReport, ScorerError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        let score = if text.contains("good") {
            0.6
        } else if text.contains("bad") {
            -0.6
        } else {
            0.0
        };
        Ok(ScoreReport::normalized(score))
    }
}
