//! Required-field validation for form submission

use crate::form::state::SkillForm;
use thiserror::Error;

/// Errors surfaced to the user when a submission is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please complete all fields.")]
    MissingFields,

    #[error("No skill named '{0}' on the current form")]
    UnknownSkill(String),
}

/// Reject the submission unless name, status, and role are all present
///
/// Whitespace-only text counts as missing. A rejected submission performs
/// no further action; the caller leaves all state unchanged.
pub fn validate(form: &SkillForm) -> Result<(), FormError> {
    let name_ok = !form.name.trim().is_empty();
    let status_ok = !form.status.trim().is_empty();
    let role_ok = form.role().is_some();
    if name_ok && status_ok && role_ok {
        Ok(())
    } else {
        Err(FormError::MissingFields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn complete_form() -> SkillForm {
        let mut form = SkillForm::new();
        form.name = "Priya".into();
        form.status = "Working".into();
        form.select_role(
            "Data Analyst",
            &BTreeMap::from([("SQL".to_string(), "Queries".to_string())]),
        );
        form
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate(&complete_form()), Ok(()));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut form = complete_form();
        form.name = "  ".into();
        assert_eq!(validate(&form), Err(FormError::MissingFields));
    }

    #[test]
    fn empty_status_is_rejected() {
        let mut form = complete_form();
        form.status.clear();
        assert_eq!(validate(&form), Err(FormError::MissingFields));
    }

    #[test]
    fn unselected_role_is_rejected() {
        let mut form = SkillForm::new();
        form.name = "Priya".into();
        form.status = "Working".into();
        assert_eq!(validate(&form), Err(FormError::MissingFields));
    }
}
