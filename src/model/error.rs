//! Error types for value-sequence generation.
//!
//! Invalid generation parameters are a startup-time configuration problem:
//! they are rejected before the terminal is touched, with enough structure
//! in the error to print a clear message. There is no mid-run recovery
//! because the layout math assumes a valid, non-empty sequence.

use thiserror::Error;

/// Errors raised when value-sequence generation parameters are invalid.
///
/// Constructed by [`crate::model::GenerationParams::new`]; once a
/// `GenerationParams` exists, generation itself cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested sequence length was zero.
    #[error("sequence length must be at least 1")]
    EmptyCount,

    /// The value range was inverted (minimum above maximum).
    #[error("inverted value range: min {min} > max {max}")]
    InvertedRange {
        /// The requested lower bound.
        min: u32,
        /// The requested upper bound.
        max: u32,
    },
}
