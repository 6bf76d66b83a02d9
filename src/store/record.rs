//! Credential record definition

use serde::{Deserialize, Serialize};

use crate::crypto::encoding::base64_bytes;
use crate::crypto::DerivedKey;

/// One persisted credential, keyed by username in the store document.
///
/// On disk the byte fields are base64 text, so the document stays a
/// plain UTF-8 JSON object:
///
/// ```json
/// { "alice": { "salt": "...", "hash": "...", "iterations": 240000 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Per-record random salt, generated once at registration
    #[serde(with = "base64_bytes")]
    pub salt: Vec<u8>,

    /// PBKDF2 output over (password, salt, iterations)
    #[serde(with = "base64_bytes")]
    pub hash: Vec<u8>,

    /// Work factor this record was written with; immutable once written
    pub iterations: u32,
}

impl CredentialRecord {
    /// Build a record from a freshly derived key
    pub fn new(salt: [u8; crate::crypto::SALT_LEN], key: &DerivedKey, iterations: u32) -> Self {
        Self {
            salt: salt.to_vec(),
            hash: key.as_bytes().to_vec(),
            iterations,
        }
    }
}
