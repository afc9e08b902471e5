//! Rating form: inputs, role-switch semantics, and submit validation

pub mod rating;
pub mod state;
pub mod validation;

pub use rating::RatingInput;
pub use state::{SkillEntry, SkillForm};
pub use validation::FormError;
