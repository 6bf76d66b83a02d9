//! Secure key handling with automatic zeroization

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KEY_LEN;

/// Derived verification key - automatically zeroed when dropped
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Create a new derived key from raw bytes
    pub fn new(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    /// Get the key bytes (use carefully - avoid copying)
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    /// Create from a slice (must be exactly 32 bytes)
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != KEY_LEN {
            return None;
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(slice);
        Some(Self { key })
    }

    /// Constant-time equality against stored key bytes.
    ///
    /// Execution time does not depend on where the first mismatching
    /// byte occurs, so a caller timing repeated login attempts learns
    /// nothing about partial key correctness.
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        self.key.as_slice().ct_eq(other).into()
    }
}

impl Clone for DerivedKey {
    fn clone(&self) -> Self {
        Self { key: self.key }
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let bytes = [42u8; 32];
        let key = DerivedKey::from_slice(&bytes).unwrap();
        assert_eq!(key.as_bytes(), &bytes);
    }

    #[test]
    fn test_from_invalid_slice() {
        let bytes = [42u8; 16];
        assert!(DerivedKey::from_slice(&bytes).is_none());
    }

    #[test]
    fn test_ct_eq() {
        let key = DerivedKey::new([7u8; 32]);
        assert!(key.ct_eq(&[7u8; 32]));
        assert!(!key.ct_eq(&[8u8; 32]));
    }

    #[test]
    fn test_ct_eq_length_mismatch() {
        let key = DerivedKey::new([7u8; 32]);
        assert!(!key.ct_eq(&[7u8; 16]));
        assert!(!key.ct_eq(&[]));
    }

    #[test]
    fn test_debug_redacted() {
        let key = DerivedKey::new([0u8; 32]);
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("0"));
    }
}
