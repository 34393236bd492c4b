//! Lexicon scorer backed by the `vader_sentiment` crate

use tracing::trace;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::scorer::{ScoreReport, Scorer, ScorerError};

const COMPOUND: &str = "compound";
const POSITIVE: &str = "pos";
const NEGATIVE: &str = "neg";
const NEUTRAL: &str = "neu";

/// VADER lexicon scorer. The `compound` score is already normalized to
/// `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for VaderScorer {
    fn score(&self, text: &str) -> Result<ScoreReport, ScorerError> {
        // The analyzer only borrows the crate's static lexicons
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        trace!("vader scores: {:?}", scores);

        let normalized = scores
            .get(COMPOUND)
            .copied()
            .ok_or(ScorerError::MissingScore { key: COMPOUND })?;

        ScoreReport {
            normalized,
            positive: scores.get(POSITIVE).copied(),
            negative: scores.get(NEGATIVE).copied(),
            neutral: scores.get(NEUTRAL).copied(),
        }
        .validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_words_score_positive() {
        let report = VaderScorer::new().score("This is great, I love it!").unwrap();
        assert!(report.normalized > 0.1, "got {}", report.normalized);
    }

    #[test]
    fn test_negative_words_score_negative() {
        let report = VaderScorer::new()
            .score("This is terrible and I hate it.")
            .unwrap();
        assert!(report.normalized < -0.1, "got {}", report.normalized);
    }

    #[test]
    fn test_score_stays_normalized() {
        let report = VaderScorer::new()
            .score("amazing amazing amazing wonderful fantastic superb!!!")
            .unwrap();
        assert!((-1.0..=1.0).contains(&report.normalized));
    }

    #[test]
    fn test_reports_proportions() {
        let report = VaderScorer::new().score("good").unwrap();
        assert!(report.positive.is_some());
        assert!(report.negative.is_some());
        assert!(report.neutral.is_some());
    }
}
