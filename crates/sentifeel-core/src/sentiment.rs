//! Sentiment domain types: labels, results, classification and confidence.
//!
//! Everything here is a pure function of a normalized score in `[-1, 1]`.
//! The scorer that produces the score lives in `sentifeel-scorer`.

use serde::{Deserialize, Serialize};

/// Scores strictly above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores strictly below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Confidence floor for any defined score
pub const BASE_CONFIDENCE: f64 = 0.3;

/// Confidence used when the scorer fails
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Overall sentiment polarity of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
    /// No text, nothing computed
    #[default]
    None,
}

impl Label {
    /// Lowercase identifier ("positive", "none", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
            Label::Neutral => "neutral",
            Label::None => "none",
        }
    }

    /// Capitalized form used as a heading
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
            Label::None => "None",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Label::None)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a normalized score. Both thresholds are strict.
pub fn classify(normalized: f64) -> Label {
    if normalized > POSITIVE_THRESHOLD {
        Label::Positive
    } else if normalized < NEGATIVE_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}

/// `min(|score| * 2 + 0.3, 1)`; always within `[0.3, 1]` for finite input
pub fn confidence_for(normalized: f64) -> f64 {
    (normalized.abs() * 2.0 + BASE_CONFIDENCE).min(1.0)
}

/// Outcome of one analysis, replaced wholesale on every run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: Label,
    pub confidence: f64,
    /// Normalized score the label was derived from. `None` when cleared or
    /// when the scorer failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SentimentResult {
    /// The empty-input state: label none, confidence 0
    pub fn none() -> Self {
        Self::default()
    }

    /// Degraded result used when the scorer errors
    pub fn fallback() -> Self {
        Self {
            label: Label::Neutral,
            confidence: FALLBACK_CONFIDENCE,
            score: None,
        }
    }

    /// Derive label and confidence from a normalized score
    pub fn from_score(normalized: f64) -> Self {
        Self {
            label: classify(normalized),
            confidence: confidence_for(normalized),
            score: Some(normalized),
        }
    }

    pub fn has_label(&self) -> bool {
        !self.label.is_none()
    }

    /// Rounded percentage, `round(confidence * 100)`
    pub fn percent(&self) -> u8 {
        percent(self.confidence)
    }

    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }

    pub fn emoji(&self) -> &'static str {
        emoji_for(self.label, self.confidence)
    }
}

/// Rounded percentage for a confidence value, clamped to `0..=100`
pub fn percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Confidence buckets used by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    /// `> 0.8`
    High,
    /// `> 0.6`
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.8 {
            ConfidenceLevel::High
        } else if confidence > 0.6 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "Very confident",
            ConfidenceLevel::Medium => "Moderately confident",
            ConfidenceLevel::Low => "Low confidence",
        }
    }
}

/// Emoji shown under the label, bucketed by confidence then label
pub fn emoji_for(label: Label, confidence: f64) -> &'static str {
    match ConfidenceLevel::from_confidence(confidence) {
        ConfidenceLevel::High => match label {
            Label::Positive => "🎉",
            Label::Negative => "😢",
            _ => "🤔",
        },
        ConfidenceLevel::Medium => match label {
            Label::Positive => "😊",
            Label::Negative => "😕",
            _ => "😐",
        },
        ConfidenceLevel::Low => "🤷",
    }
}

/// Glyph for the "Emotion" cell of the details card
pub fn emotion_glyph(label: Label) -> &'static str {
    match label {
        Label::Positive => "✨",
        Label::Negative => "⚡",
        _ => "🔮",
    }
}
