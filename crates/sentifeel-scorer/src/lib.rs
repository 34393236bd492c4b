//! sentifeel-scorer - Boundary to the external sentiment scorer
//!
//! The scoring algorithm is not ours: [`VaderScorer`] delegates to the
//! `vader_sentiment` lexicon. This crate owns the seam around it:
//!
//! - [`Scorer`] - text → [`ScoreReport`] (normalized score in `[-1, 1]`) or [`ScorerError`]
//! - [`analyze()`] - the adapter that turns a score into a [`SentimentResult`],
//!   short-circuits blank text and swallows scorer failures into the fallback
//!
//! [`SentimentResult`]: sentifeel_core::SentimentResult

pub mod analyze;
pub mod scorer;
pub mod vader;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use analyze::analyze;
pub use scorer::{ScoreReport, Scorer, ScorerError};
pub use vader::VaderScorer;
