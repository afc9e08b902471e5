//! A single rating input with increment/decrement semantics

use crate::core::types::{clamp_rating, Rating, RATING_MIN};

/// One skill's rating input
///
/// Starts at the minimum and is only ever changed through [`adjust`], so the
/// stored value can never leave [1, 10].
///
/// [`adjust`]: RatingInput::adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingInput {
    value: Rating,
}

impl Default for RatingInput {
    fn default() -> Self {
        Self { value: RATING_MIN }
    }
}

impl RatingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value
    pub fn value(&self) -> Rating {
        self.value
    }

    /// Apply a +1/-1 style adjustment, clamping to the valid range
    ///
    /// Returns the value after clamping.
    pub fn adjust(&mut self, delta: i16) -> Rating {
        self.value = clamp_rating(self.value as i16 + delta);
        self.value
    }
}
