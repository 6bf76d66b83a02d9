//! Password-based key derivation using PBKDF2-HMAC-SHA256

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use super::DerivedKey;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (256-bit digest)
pub const KEY_LEN: usize = 32;

/// Lowest iteration count any record may be written with
pub const MIN_ITERATIONS: u32 = 200_000;

/// Iteration count used for newly registered records.
///
/// Recorded per record, so raising this later only affects new
/// registrations and never invalidates existing records.
pub const DEFAULT_ITERATIONS: u32 = 240_000;

/// Generate a cryptographically secure random salt.
///
/// Called once per registration; never reused across users and never
/// derived from the password.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Derive a 256-bit verification key from a password.
///
/// Deterministic: the same (password, salt, iterations) triple always
/// yields the same key, which is what login verification relies on.
/// Deliberately slow - cost scales linearly with `iterations` to resist
/// offline brute force. Do not replace with a fast hash.
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    DerivedKey::new(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full-cost derivation is exercised by the service tests; these use
    // a reduced count because determinism, not cost, is under test.
    const TEST_ITERATIONS: u32 = 1_000;

    #[test]
    fn test_generate_salt() {
        let salt1 = generate_salt();
        let salt2 = generate_salt();

        assert_eq!(salt1.len(), SALT_LEN);
        assert_ne!(salt1, salt2);
    }

    #[test]
    fn test_salts_never_repeat() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(generate_salt()));
        }
    }

    #[test]
    fn test_derive_key_deterministic() {
        let salt = generate_salt();

        let key1 = derive_key("test-password-123", &salt, TEST_ITERATIONS);
        let key2 = derive_key("test-password-123", &salt, TEST_ITERATIONS);

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_different_passwords() {
        let salt = generate_salt();

        let key1 = derive_key("password1", &salt, TEST_ITERATIONS);
        let key2 = derive_key("password2", &salt, TEST_ITERATIONS);

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_different_salts() {
        let key1 = derive_key("test-password", &generate_salt(), TEST_ITERATIONS);
        let key2 = derive_key("test-password", &generate_salt(), TEST_ITERATIONS);

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_different_iterations() {
        let salt = generate_salt();

        let key1 = derive_key("test-password", &salt, TEST_ITERATIONS);
        let key2 = derive_key("test-password", &salt, TEST_ITERATIONS + 1);

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_single_char_change_changes_key() {
        let salt = generate_salt();

        let key1 = derive_key("Valid1Pass!", &salt, TEST_ITERATIONS);
        let key2 = derive_key("Valid2Pass!", &salt, TEST_ITERATIONS);

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_default_iterations_meet_floor() {
        assert!(DEFAULT_ITERATIONS >= MIN_ITERATIONS);
    }
}
