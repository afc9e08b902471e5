//! Skill Gap Analyzer
//!
//! Collects self-assessed skill ratings for an aspiring role, compares them
//! against fixed targets, renders a grouped bar chart, and emits a PDF
//! report with a static roadmap.

pub mod catalog;
pub mod core;
pub mod form;
pub mod report;
pub mod session;
pub mod store;
