//! JSON document storage for credential records

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::CredentialRecord;
use crate::error::{AuthError, Result};

/// Fixed relative filename for the credential document
pub const DEFAULT_STORE_FILE: &str = "credentials.json";

/// File-backed credential store.
///
/// Holds only the document path; every `load`/`save` is one blocking
/// filesystem operation and no state is cached in between.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store using the default document path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }

    /// Create a store with a custom document path (for testing)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full username -> record mapping from disk.
    ///
    /// A missing document means "no users yet" and yields an empty map.
    /// A document that exists but fails to parse (truncated JSON, bad
    /// base64 in a record) also yields an empty map; the failure is
    /// logged but not surfaced, which can mask data loss on a corrupted
    /// file. Preserved as-is: callers observing a corrupt document see
    /// the same behavior as a fresh install. Read failures that are not
    /// "file absent" (permissions, disk) are real errors and propagate.
    pub fn load(&self) -> Result<HashMap<String, CredentialRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no credential document at {:?}, starting empty", self.path);
                return Ok(HashMap::new());
            }
            Err(e) => {
                return Err(AuthError::StorageError(format!(
                    "failed to read {:?}: {}",
                    self.path, e
                )))
            }
        };

        match serde_json::from_str::<HashMap<String, CredentialRecord>>(&contents) {
            Ok(records) => {
                debug!("loaded {} credential records", records.len());
                Ok(records)
            }
            Err(e) => {
                warn!(
                    "credential document {:?} failed to parse, treating as empty: {}",
                    self.path, e
                );
                Ok(HashMap::new())
            }
        }
    }

    /// Serialize the full mapping and overwrite the document.
    ///
    /// One plain write, not atomic: a crash mid-write can leave a
    /// corrupt document (no temp-file rename or journaling here).
    pub fn save(&self, records: &HashMap<String, CredentialRecord>) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, contents).map_err(|e| {
            AuthError::StorageError(format!("failed to write {:?}: {}", self.path, e))
        })?;

        debug!("saved {} credential records", records.len());
        Ok(())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
