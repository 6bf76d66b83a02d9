//! # credstore
//!
//! A local credential store: registers usernames with passwords,
//! derives a salted key for each, persists records to a single JSON
//! document, and verifies later login attempts without ever storing or
//! comparing a plaintext password.
//!
//! Security properties:
//! - Per-record random 16-byte salt, so identical passwords never
//!   produce identical stored values
//! - PBKDF2-HMAC-SHA256 key derivation with a per-record iteration
//!   count (floor 200,000), deliberately slow against offline attacks
//! - Constant-time key comparison during login
//! - Unknown username and wrong password return the same error, so
//!   callers cannot enumerate registered usernames
//!
//! The store assumes a single running process; there is no file
//! locking, and concurrent writers can lose updates.

pub mod crypto;
pub mod error;
pub mod policy;
pub mod service;
pub mod store;

pub use crypto::{
    derive_key, generate_salt, DerivedKey, DEFAULT_ITERATIONS, KEY_LEN, MIN_ITERATIONS, SALT_LEN,
};
pub use error::{AuthError, Result};
pub use policy::PolicyViolation;
pub use service::AuthService;
pub use store::{CredentialRecord, CredentialStore, DEFAULT_STORE_FILE};
