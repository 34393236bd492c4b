//! Scorer adapter: score → label + confidence, with the silent fallback

use sentifeel_core::prelude::*;
use sentifeel_core::{is_blank, SentimentResult};

use crate::scorer::Scorer;

/// Analyze `text` with `scorer`.
///
/// - Blank text yields [`SentimentResult::none()`] and never reaches the scorer.
/// - A scorer error yields [`SentimentResult::fallback()`] (neutral, 0.5). The
///   error is logged and not returned.
pub fn analyze(scorer: &dyn Scorer, text: &str) -> SentimentResult {
    if is_blank(text) {
        return SentimentResult::none();
    }

    match scorer.score(text).and_then(|report| report.validated()) {
        Ok(report) => {
            let result = SentimentResult::from_score(report.normalized);
            debug!(
                "Analyzed {} chars: score={:.4} label={} confidence={:.2}",
                text.chars().count(),
                report.normalized,
                result.label,
                result.confidence
            );
            result
        }
        Err(e) => {
            error!("Sentiment analysis error: {}", e);
            SentimentResult::fallback()
        }
    }
}
