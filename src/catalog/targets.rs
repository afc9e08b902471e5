//! Fixed target proficiency levels per role
//!
//! Targets are defined in code, not loaded from the catalog file. Every
//! built-in entry sits at the maximum rating; the table still stores an
//! explicit level per skill so individual targets could diverge later.

use crate::core::types::{Rating, RATING_MAX};
use std::collections::HashMap;

/// Target assumed for a skill that is missing from the table
///
/// Used by the PDF report when the user rated a skill the target table
/// does not know about.
pub const DEFAULT_TARGET: Rating = RATING_MAX;

/// Static mapping from role to its per-skill target levels
///
/// Skill order within a role is canonical (the order skills are taught in),
/// and the chart draws its bars in this order.
#[derive(Debug, Clone)]
pub struct TargetLevels {
    by_role: HashMap<String, Vec<(String, Rating)>>,
}

impl TargetLevels {
    /// The built-in target table for the shipped roles
    pub fn builtin() -> Self {
        let mut by_role = HashMap::new();
        by_role.insert(
            "Data Analyst".to_string(),
            target_row(&["Excel", "SQL", "Power BI", "Python"]),
        );
        by_role.insert(
            "Data Scientist".to_string(),
            target_row(&[
                "Python (Pandas/Numpy etc)",
                "Machine Learning (Scikit-learn)",
                "Statistics",
                "Deep Learning",
            ]),
        );
        Self { by_role }
    }

    /// Ordered (skill, target) pairs for a role; empty slice for unknown roles
    pub fn for_role(&self, role: &str) -> &[(String, Rating)] {
        self.by_role.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Target level for one skill of a role, if the table has it
    pub fn target_for(&self, role: &str, skill: &str) -> Option<Rating> {
        self.by_role
            .get(role)?
            .iter()
            .find(|(s, _)| s == skill)
            .map(|(_, t)| *t)
    }
}

fn target_row(skills: &[&str]) -> Vec<(String, Rating)> {
    skills.iter().map(|s| (s.to_string(), RATING_MAX)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_targets_are_all_max() {
        let targets = TargetLevels::builtin();
        for role in ["Data Analyst", "Data Scientist"] {
            let row = targets.for_role(role);
            assert_eq!(row.len(), 4);
            assert!(row.iter().all(|(_, t)| *t == 10));
        }
    }

    #[test]
    fn lookup_by_skill() {
        let targets = TargetLevels::builtin();
        assert_eq!(targets.target_for("Data Analyst", "SQL"), Some(10));
        assert_eq!(targets.target_for("Data Analyst", "Juggling"), None);
        assert_eq!(targets.target_for("Barista", "SQL"), None);
    }

    #[test]
    fn unknown_role_has_no_targets() {
        let targets = TargetLevels::builtin();
        assert!(targets.for_role("Barista").is_empty());
    }
}
