use thiserror::Error;

use crate::catalog::CatalogError;
use crate::form::FormError;

#[derive(Error, Debug)]
pub enum SkillGapError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("No record has been submitted yet")]
    NoSubmission,

    #[error("Chart render error: {0}")]
    Chart(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillGapError>;
