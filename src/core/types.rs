//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Self-assessed proficiency rating, clamped to [1, 10] at input time
pub type Rating = u8;

/// Minimum allowed rating
pub const RATING_MIN: Rating = 1;

/// Maximum allowed rating (also the fixed target level for every skill)
pub const RATING_MAX: Rating = 10;

/// A submitted self-assessment
///
/// Created on form submission and appended to the persisted list; records
/// are never updated or deleted. Skills are keyed by name with deterministic
/// (alphabetical) iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub status: String,
    pub aspiring_role: String,
    pub skills: BTreeMap<String, Rating>,
}

impl UserRecord {
    /// Rating the user gave for a skill, or 0 if it was never rated
    ///
    /// The zero default matches chart semantics: a target-table skill the
    /// user did not rate is drawn as an empty bar.
    pub fn rating_or_zero(&self, skill: &str) -> Rating {
        self.skills.get(skill).copied().unwrap_or(0)
    }
}

/// Clamp an adjusted rating back into the valid range
pub fn clamp_rating(value: i16) -> Rating {
    value.clamp(RATING_MIN as i16, RATING_MAX as i16) as Rating
}
