//! URL syntax validation restricted to the http/https schemes.

use thiserror::Error;
use url::Url;

/// Why a candidate string was rejected.
///
/// Parse failures are contained here; nothing escapes [`is_valid`] as an
/// error or a panic.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Candidate was empty.
    #[error("empty URL")]
    Empty,
    /// Candidate did not parse as an absolute URL.
    #[error("not a valid URL: {0}")]
    Parse(#[from] url::ParseError),
    /// Candidate parsed, but with a scheme other than http/https.
    #[error("scheme '{0}' is not allowed, only http/https")]
    Scheme(String),
}

/// Checks that `candidate` parses as an absolute `http`/`https` URL.
///
/// The parsed [`Url`] is dropped on purpose: validation must not substitute
/// the parser's normalized rendering for the caller's string.
pub fn validate(candidate: &str) -> Result<(), ValidateError> {
    if candidate.is_empty() {
        return Err(ValidateError::Empty);
    }
    let parsed = Url::parse(candidate)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ValidateError::Scheme(other.to_string())),
    }
}

/// Predicate form of [`validate`].
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}
