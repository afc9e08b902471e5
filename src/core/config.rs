//! File-path configuration
//!
//! All fixed output and input paths are collected here. The defaults match
//! the paths the tool has always used; tests redirect everything into a
//! temporary directory with [`AppConfig::rooted_at`].

use std::path::{Path, PathBuf};

/// Fixed file paths used by the analyzer
///
/// Every path is overwritten in place: the chart and PDF are replaced on
/// each generation, and the users file is rewritten in full on each append.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Role catalog (role -> skill -> description), read once at startup
    pub roles_path: PathBuf,
    /// Persisted user records, rewritten in full on each submission
    pub users_path: PathBuf,
    /// Grouped bar chart image, overwritten per submission
    pub chart_path: PathBuf,
    /// PDF report, overwritten per generation
    pub pdf_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roles_path: PathBuf::from("roles.json"),
            users_path: PathBuf::from("users.json"),
            chart_path: PathBuf::from("skill_gap_chart.png"),
            pdf_path: PathBuf::from("Skill_Roadmap.pdf"),
        }
    }
}

impl AppConfig {
    /// Create a config with the default file names
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-root every path under the given directory, keeping the file names
    pub fn rooted_at(dir: &Path) -> Self {
        let base = Self::default();
        Self {
            roles_path: dir.join(base.roles_path),
            users_path: dir.join(base.users_path),
            chart_path: dir.join(base.chart_path),
            pdf_path: dir.join(base.pdf_path),
        }
    }
}
