//! `refang check` – convert one URL and require that it validates.

use anyhow::{bail, Result};
use refang_core::defang::{normalize, validate};

/// Convert `url`, print the normalized form, and fail unless it parses as an
/// http/https URL. Exit status is the scriptable verdict.
pub fn run_check(url: &str) -> Result<()> {
    let normalized = normalize(Some(url));
    println!("{normalized}");
    if let Err(err) = validate(&normalized) {
        bail!("{err}");
    }
    tracing::debug!("checked ok: {normalized}");
    Ok(())
}
