//! The scorer seam: trait, report and error types

use serde::Serialize;
use thiserror::Error;

/// Why a scorer could not produce a usable score
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerError {
    #[error("scorer produced no '{key}' value")]
    MissingScore { key: &'static str },

    #[error("scorer produced an invalid score: {value}")]
    InvalidScore { value: f64 },

    #[error("scorer rejected input: {reason}")]
    Rejected { reason: String },
}

impl ScorerError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Structured scorer output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Polarity in `[-1, 1]`
    pub normalized: f64,
    /// Share of the text rated positive, when the scorer reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,
}

impl ScoreReport {
    /// A report carrying only the normalized score
    pub fn normalized(normalized: f64) -> Self {
        Self {
            normalized,
            positive: None,
            negative: None,
            neutral: None,
        }
    }

    /// Reject non-finite scores and pull tiny overshoots back into `[-1, 1]`
    pub fn validated(self) -> Result<Self, ScorerError> {
        if !self.normalized.is_finite() {
            return Err(ScorerError::InvalidScore {
                value: self.normalized,
            });
        }
        Ok(Self {
            normalized: self.normalized.clamp(-1.0, 1.0),
            ..self
        })
    }
}

/// Opaque sentiment function: text in, normalized score out
///
/// Implementations must be cheap enough to call synchronously on the UI
/// thread; no timeout is applied.
#[cfg_attr(test, mockall::automock)]
pub trait Scorer: Send + Sync {
    fn score(&self, text: &str) -> Result<ScoreReport, ScorerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_passes_in_range_scores() {
        let report = ScoreReport::normalized(-0.42).validated().unwrap();
        assert_eq!(report.normalized, -0.42);
    }

    #[test]
    fn test_validated_clamps_overshoot() {
        let report = ScoreReport::normalized(1.5).validated().unwrap();
        assert_eq!(report.normalized, 1.0);
        let report = ScoreReport::normalized(-3.0).validated().unwrap();
        assert_eq!(report.normalized, -1.0);
    }

    #[test]
    fn test_validated_rejects_nan_and_infinity() {
        assert!(matches!(
            ScoreReport::normalized(f64::NAN).validated(),
            Err(ScorerError::InvalidScore { .. })
        ));
        assert!(matches!(
            ScoreReport::normalized(f64::INFINITY).validated(),
            Err(ScorerError::InvalidScore { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = ScorerError::MissingScore { key: "compound" };
        assert_eq!(err.to_string(), "scorer produced no 'compound' value");
        assert!(ScorerError::rejected("too long")
            .to_string()
            .contains("too long"));
    }
}
