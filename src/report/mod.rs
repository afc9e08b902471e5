//! Chart and PDF report generation

pub mod chart;
pub mod pdf;
pub mod suggestion;

pub use chart::render_chart;
pub use pdf::generate_report;
pub use suggestion::{gap, suggestion_for};
