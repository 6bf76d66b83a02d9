//! Cryptographic primitives for credential verification
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 key derivation from passwords
//! - Base64 encoding for binary fields in the persisted document
//! - Secure key handling with zeroize and constant-time comparison

pub mod encoding;
mod derived_key;
mod key_derivation;

pub use derived_key::DerivedKey;
pub use key_derivation::{
    derive_key, generate_salt, DEFAULT_ITERATIONS, KEY_LEN, MIN_ITERATIONS, SALT_LEN,
};
