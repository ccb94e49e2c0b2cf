//! Defanged-URL conversion: reverse analyst defanging, then validate.
//!
//! Security analysts mutate URLs in phishing reports so they cannot be
//! clicked by accident (`hxxp://example[.]com`). This module turns such
//! strings back into plain URLs. Two pure functions with no shared state:
//! [`normalize`] rewrites the fixed defanging pattern set and guarantees a
//! scheme prefix, [`is_valid`] checks that the result parses as an
//! http/https URL. [`refang`] sequences the two for callers that want both
//! the rewritten string and the verdict.

mod normalize;
mod validate;

pub use normalize::normalize;
pub use validate::{is_valid, validate, ValidateError};

use serde::Serialize;

/// Result of converting one defanged input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Refanged {
    /// Rewritten URL text (empty when the input was absent or blank).
    pub url: String,
    /// Whether `url` parses as an http/https URL.
    pub valid: bool,
}

/// Converts one defanged input: normalize, then validate.
///
/// Total over its input; never fails.
///
/// # Examples
///
/// - `refang(Some("hxxp://example[.]com"))` → `http://example.com`, valid
/// - `refang(Some("just some text"))` → `http://just some text`, invalid
/// - `refang(None)` → empty, invalid
pub fn refang(input: Option<&str>) -> Refanged {
    let url = normalize(input);
    let valid = is_valid(&url);
    Refanged { url, valid }
}
