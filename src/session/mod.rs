//! Session state machine
//!
//! Owns the form, the persisted store, and the single "latest submitted
//! record" slot. Phases follow the original UI: nothing is available until
//! a role is selected, the PDF action only unlocks after a submission, and
//! selecting a role from any phase resets to a fresh skill set.

use crate::catalog::{RoleCatalog, TargetLevels};
use crate::core::config::AppConfig;
use crate::core::error::{Result, SkillGapError};
use crate::core::types::{Rating, UserRecord};
use crate::form::SkillForm;
use crate::report;
use crate::store::UserStore;
use std::path::Path;

/// Where the session currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoRoleSelected,
    RoleSelected,
    Submitted,
    PdfGenerated,
}

/// One interactive session over the catalog, form, and output files
pub struct Session {
    config: AppConfig,
    catalog: RoleCatalog,
    targets: TargetLevels,
    store: UserStore,
    form: SkillForm,
    latest: Option<UserRecord>,
    phase: Phase,
}

impl Session {
    /// Load the catalog and start with nothing selected
    pub fn new(config: AppConfig) -> Result<Self> {
        let catalog = RoleCatalog::load_from_file(&config.roles_path)?;
        tracing::info!(
            path = %config.roles_path.display(),
            roles = catalog.len(),
            "loaded role catalog"
        );
        let store = UserStore::new(&config.users_path);
        Ok(Self {
            config,
            catalog,
            targets: TargetLevels::builtin(),
            store,
            form: SkillForm::new(),
            latest: None,
            phase: Phase::NoRoleSelected,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &SkillForm {
        &self.form
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Latest submitted record, if any
    pub fn latest(&self) -> Option<&UserRecord> {
        self.latest.as_ref()
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
    }

    pub fn set_status(&mut self, status: &str) {
        self.form.status = status.to_string();
    }

    /// Select a role, discarding any in-progress ratings
    ///
    /// Valid from every phase; always lands in `RoleSelected`.
    pub fn select_role(&mut self, role: &str) -> Result<()> {
        let skills = self
            .catalog
            .skills(role)
            .ok_or_else(|| SkillGapError::UnknownRole(role.to_string()))?;
        self.form.select_role(role, skills);
        self.phase = Phase::RoleSelected;
        Ok(())
    }

    /// Adjust one skill's rating by +1/-1
    pub fn adjust_rating(&mut self, skill: &str, delta: i16) -> Result<Rating> {
        Ok(self.form.adjust_rating(skill, delta)?)
    }

    /// Validate, persist, and chart the current form
    ///
    /// On success the record becomes the latest submission and the PDF
    /// action unlocks. On a validation failure nothing changes: no record
    /// is stored, no chart is drawn, and the phase stays put.
    pub fn submit(&mut self) -> Result<&UserRecord> {
        let record = match self.form.to_record() {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(error = %e, "submission rejected");
                return Err(e.into());
            }
        };
        self.store.append(&record)?;
        report::render_chart(&record, &self.targets, &self.config.chart_path)?;
        self.phase = Phase::Submitted;
        Ok(self.latest.insert(record))
    }

    /// Generate the PDF for the latest submission
    ///
    /// Only reachable once something has been submitted.
    pub fn generate_pdf(&mut self) -> Result<&Path> {
        if !matches!(self.phase, Phase::Submitted | Phase::PdfGenerated) {
            return Err(SkillGapError::NoSubmission);
        }
        let record = self.latest.as_ref().ok_or(SkillGapError::NoSubmission)?;
        report::generate_report(
            record,
            &self.targets,
            &self.config.chart_path,
            &self.config.pdf_path,
        )?;
        self.phase = Phase::PdfGenerated;
        Ok(&self.config.pdf_path)
    }
}
