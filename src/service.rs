//! Registration and login orchestration

use tracing::{debug, info};

use crate::crypto::{derive_key, generate_salt, DEFAULT_ITERATIONS, MIN_ITERATIONS};
use crate::error::{AuthError, Result};
use crate::policy;
use crate::store::{CredentialRecord, CredentialStore};

/// Authentication service over a file-backed credential store.
///
/// Owns no prompts and produces no sessions: callers pass raw strings
/// in and get typed results back, and a successful login is just the
/// `Ok` outcome. The document is re-loaded from disk on every call
/// rather than held in memory, matching the store's single-owner,
/// no-locking model.
pub struct AuthService {
    store: CredentialStore,
    iterations: u32,
}

impl AuthService {
    /// Create a service with the default work factor
    pub fn new(store: CredentialStore) -> Self {
        Self {
            store,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Create a service with a custom work factor for new registrations.
    ///
    /// Counts below the floor of 200,000 are rejected; existing records
    /// keep whatever count they were written with.
    pub fn with_iterations(store: CredentialStore, iterations: u32) -> Result<Self> {
        if iterations < MIN_ITERATIONS {
            return Err(AuthError::Validation(format!(
                "iteration count {} is below the minimum of {}",
                iterations, MIN_ITERATIONS
            )));
        }
        Ok(Self { store, iterations })
    }

    /// Get the underlying store
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Register a new user.
    ///
    /// Checks run in order: non-empty username, username not already
    /// taken, password policy, confirmation match. On success a fresh
    /// salt is generated, the key is derived at the service's current
    /// work factor, and the whole document is persisted.
    pub fn register(&self, username: &str, password: &str, confirmation: &str) -> Result<()> {
        if username.is_empty() {
            return Err(AuthError::Validation("username must not be empty".to_string()));
        }

        let mut records = self.store.load()?;

        if records.contains_key(username) {
            return Err(AuthError::Validation(format!(
                "username {:?} is already taken",
                username
            )));
        }

        policy::validate(password)?;

        if password != confirmation {
            return Err(AuthError::Validation(
                "password confirmation does not match".to_string(),
            ));
        }

        let salt = generate_salt();
        let key = derive_key(password, &salt, self.iterations);
        records.insert(
            username.to_string(),
            CredentialRecord::new(salt, &key, self.iterations),
        );
        self.store.save(&records)?;

        info!("registered user {:?}", username);
        Ok(())
    }

    /// Verify a login attempt.
    ///
    /// Unknown username and wrong password both return the same
    /// [`AuthError::InvalidCredentials`], so a caller cannot probe
    /// which usernames exist. Verification recomputes the key with the
    /// record's stored salt and iteration count and compares it in
    /// constant time.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        let records = self.store.load()?;

        let record = records.get(username).ok_or(AuthError::InvalidCredentials)?;

        let candidate = derive_key(password, &record.salt, record.iterations);
        if candidate.ct_eq(&record.hash) {
            debug!("login succeeded for {:?}", username);
            Ok(username.to_string())
        } else {
            debug!("login failed for {:?}", username);
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Check whether a username is registered.
    ///
    /// Convenience for front ends; reads the same document and reveals
    /// nothing about record contents.
    pub fn is_registered(&self, username: &str) -> Result<bool> {
        let records = self.store.load()?;
        Ok(records.contains_key(username))
    }
}
