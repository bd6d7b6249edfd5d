//! Value sequence generation.

use crate::model::error::GenerateError;
use rand::Rng;

/// Validated parameters for value-sequence generation.
///
/// The constructor rejects invalid inputs, so any `GenerationParams` in
/// circulation describes a generatable sequence and [`generate_values`]
/// is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    count: usize,
    min_value: u32,
    max_value: u32,
}

impl GenerationParams {
    /// Validate `count` and the inclusive value range `[min_value, max_value]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyCount`] when `count` is zero and
    /// [`GenerateError::InvertedRange`] when `min_value > max_value`.
    pub fn new(count: usize, min_value: u32, max_value: u32) -> Result<Self, GenerateError> {
        if count == 0 {
            return Err(GenerateError::EmptyCount);
        }
        if min_value > max_value {
            return Err(GenerateError::InvertedRange {
                min: min_value,
                max: max_value,
            });
        }
        Ok(Self {
            count,
            min_value,
            max_value,
        })
    }

    /// Number of values to generate.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Inclusive lower bound of the value range.
    pub fn min_value(&self) -> u32 {
        self.min_value
    }

    /// Inclusive upper bound of the value range.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }
}

/// Draw a fresh sequence of `params.count()` values, each sampled uniformly
/// and independently from the inclusive range.
///
/// Pure in its inputs plus the random source: a seeded [`rand::rngs::StdRng`]
/// reproduces the same sequence.
pub fn generate_values(params: &GenerationParams, rng: &mut impl Rng) -> Vec<u32> {
    (0..params.count)
        .map(|_| rng.gen_range(params.min_value..=params.max_value))
        .collect()
}
