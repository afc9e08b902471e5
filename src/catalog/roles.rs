//! Load the role catalog from a JSON file
//!
//! The catalog maps role name -> skill name -> description. It is read once
//! at startup and immutable afterwards; selecting a role in the form pulls
//! its skill set from here.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Catalog parsed but contains no roles
    #[error("Catalog is empty")]
    Empty,
}

/// Immutable mapping from role name to its skill descriptions
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RoleCatalog {
    roles: BTreeMap<String, BTreeMap<String, String>>,
}

impl RoleCatalog {
    /// Parse a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: RoleCatalog = serde_json::from_str(json)?;
        if catalog.roles.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Role names in deterministic order
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Skill name -> description for a role, if the role exists
    pub fn skills(&self, role: &str) -> Option<&BTreeMap<String, String>> {
        self.roles.get(role)
    }

    /// Whether the catalog contains a role
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Number of roles in the catalog
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Data Analyst": {
            "Excel": "Spreadsheets, formulas, pivot tables",
            "SQL": "Queries, joins, aggregation"
        }
    }"#;

    #[test]
    fn parses_roles_and_skills() {
        let catalog = RoleCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Data Analyst"));
        let skills = catalog.skills("Data Analyst").unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills["SQL"], "Queries, joins, aggregation");
    }

    #[test]
    fn unknown_role_is_none() {
        let catalog = RoleCatalog::from_json(SAMPLE).unwrap();
        assert!(catalog.skills("Data Scientist").is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            RoleCatalog::from_json("{}"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            RoleCatalog::from_json("not json"),
            Err(CatalogError::JsonError(_))
        ));
    }
}
