//! Append-only persistence for submitted records
//!
//! The whole list is rewritten on every append. A missing file is an empty
//! list; a corrupt file is an error, not an empty list, so existing data is
//! never silently clobbered. Not safe under concurrent writers, which is
//! fine for a single-user tool.

use crate::core::error::Result;
use crate::core::types::UserRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persisted list of submitted user records
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store backed by the given file path
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Load every persisted record
    ///
    /// A file that does not exist yet yields an empty list; any other read
    /// or parse failure propagates.
    pub fn load(&self) -> Result<Vec<UserRecord>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Append one record, rewriting the whole file
    pub fn append(&self, record: &UserRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record.clone());
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, json)?;
        tracing::info!(
            path = %self.path.display(),
            total = records.len(),
            "appended user record"
        );
        Ok(())
    }

    /// Number of persisted records
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }
}
