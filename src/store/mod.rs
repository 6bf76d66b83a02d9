//! Credential record persistence
//!
//! The store is a single JSON document mapping usernames to records.
//! It is treated as exclusively owned by one running process for the
//! duration of a load-mutate-save cycle; there is no locking and no
//! transaction log, so concurrent processes can race (lost-update
//! hazard). That limitation is part of the design, not an oversight.

mod file;
mod record;

pub use file::{CredentialStore, DEFAULT_STORE_FILE};
pub use record::CredentialRecord;
