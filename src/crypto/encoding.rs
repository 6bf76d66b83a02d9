//! Base64 encoding for binary record fields
//!
//! Salt and derived-key bytes live inside a JSON document, so they are
//! stored as standard (padded) base64 text. Decoding is strict: any
//! non-alphabet character or bad padding is a malformed record.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::AuthError;

/// Encode bytes as standard base64 text
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard base64 text back into bytes.
///
/// Fails with [`AuthError::MalformedRecord`] if the input is not valid
/// base64 output (non-alphabet characters, incorrect padding).
pub fn decode(text: &str) -> Result<Vec<u8>, AuthError> {
    STANDARD
        .decode(text)
        .map_err(|e| AuthError::MalformedRecord(e.to_string()))
}

/// serde adapter storing byte fields as base64 strings
pub mod base64_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::decode(&text).map_err(serde::de::Error::custom)
    }
}
