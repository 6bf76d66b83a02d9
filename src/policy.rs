//! Password strength policy
//!
//! Candidate passwords are checked against a fixed rule set before any
//! key derivation happens. Checks run in a fixed order and the first
//! failing rule is returned, so callers always see one specific reason.

use thiserror::Error;

/// Minimum password length in characters
pub const MIN_LENGTH: usize = 8;

/// Accepted special characters
pub const SPECIAL_CHARS: &str = "!@#$%^&*()-_=+[]{};:,.?/";

/// A password policy rule that was not satisfied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("password must be at least {} characters long", MIN_LENGTH)]
    TooShort,

    #[error("password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("password must contain at least one digit")]
    MissingDigit,

    #[error("password must contain at least one special character ({})", SPECIAL_CHARS)]
    MissingSpecial,
}

/// Validate a candidate password against the policy.
///
/// Rules are evaluated in order: length, lowercase, uppercase, digit,
/// special character. The first violation is returned (fail-fast, not
/// aggregate). There is no maximum length and no dictionary check.
pub fn validate(password: &str) -> Result<(), PolicyViolation> {
    if password.chars().count() < MIN_LENGTH {
        return Err(PolicyViolation::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PolicyViolation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PolicyViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PolicyViolation::MissingDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(PolicyViolation::MissingSpecial);
    }
    Ok(())
}
