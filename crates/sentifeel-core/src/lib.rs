//! # sentifeel-core - Core Domain Types
//!
//! Foundation crate for SentiFeel. Provides the sentiment domain types,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Sentiment (`sentiment`)
//! - [`Label`] - Polarity label (Positive, Negative, Neutral, None)
//! - [`SentimentResult`] - Label + confidence derived from a normalized score
//! - [`classify()`] / [`confidence_for()`] - Fixed thresholds and confidence formula
//! - [`ConfidenceLevel`] - High / Medium / Low buckets used by the view
//!
//! ### Text (`text_stats`)
//! - [`TextStats`] - Character and word counts
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sentifeel_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod sentiment;
pub mod text_stats;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use sentiment::{
    classify, confidence_for, emoji_for, emotion_glyph, percent, ConfidenceLevel, Label,
    SentimentResult, BASE_CONFIDENCE, FALLBACK_CONFIDENCE, NEGATIVE_THRESHOLD,
    POSITIVE_THRESHOLD,
};
pub use text_stats::{is_blank, TextStats};
