//! Form field state
//!
//! Holds the free-text fields, the selected role, and one rating input per
//! skill of that role. Selecting a role replaces the entire skill-input set;
//! any ratings entered for the previous role are discarded.

use crate::core::types::{Rating, UserRecord};
use crate::form::rating::RatingInput;
use crate::form::validation::{self, FormError};
use std::collections::BTreeMap;

/// One row of the skill form
#[derive(Debug, Clone)]
pub struct SkillEntry {
    pub skill: String,
    pub description: String,
    pub rating: RatingInput,
}

/// The whole form: name, status, selected role, and per-skill ratings
#[derive(Debug, Clone, Default)]
pub struct SkillForm {
    pub name: String,
    pub status: String,
    role: Option<String>,
    entries: Vec<SkillEntry>,
}

impl SkillForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected role, if any
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Skill rows in catalog order
    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    /// Select a role, rebuilding the skill-input set from its catalog skills
    ///
    /// All entries start back at the default rating, including when the same
    /// role is re-selected.
    pub fn select_role(&mut self, role: &str, skills: &BTreeMap<String, String>) {
        self.role = Some(role.to_string());
        self.entries = skills
            .iter()
            .map(|(skill, description)| SkillEntry {
                skill: skill.clone(),
                description: description.clone(),
                rating: RatingInput::new(),
            })
            .collect();
    }

    /// Adjust one skill's rating by +1/-1, returning the clamped value
    pub fn adjust_rating(&mut self, skill: &str, delta: i16) -> Result<Rating, FormError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.skill == skill)
            .ok_or_else(|| FormError::UnknownSkill(skill.to_string()))?;
        Ok(entry.rating.adjust(delta))
    }

    /// Validate required fields and build a record from the current values
    ///
    /// The form itself is left untouched, matching the original behavior of
    /// keeping field contents on screen after submission.
    pub fn to_record(&self) -> Result<UserRecord, FormError> {
        validation::validate(self)?;
        // validate() guarantees the role is present
        let role = self.role.clone().unwrap_or_default();
        Ok(UserRecord {
            name: self.name.trim().to_string(),
            status: self.status.trim().to_string(),
            aspiring_role: role,
            skills: self
                .entries
                .iter()
                .map(|e| (e.skill.clone(), e.rating.value()))
                .collect(),
        })
    }
}
