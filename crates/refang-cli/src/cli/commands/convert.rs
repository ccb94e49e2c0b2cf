//! `refang convert` – convert defanged URLs from arguments or stdin.

use anyhow::{bail, Result};
use refang_core::defang::{refang, Refanged};
use std::io::BufRead;

/// Convert each input and print one result per line on stdout.
///
/// With `json`, each line is a serialized [`Refanged`] object; otherwise the
/// rewritten URL alone. With `strict`, exits non-zero if any result failed
/// validation.
pub fn run_convert(urls: &[String], json: bool, strict: bool) -> Result<()> {
    let inputs: Vec<String> = if urls.is_empty() {
        read_stdin_lines()?
    } else {
        urls.to_vec()
    };

    let mut invalid = 0usize;
    for input in &inputs {
        let result = refang(Some(input.as_str()));
        if !result.valid {
            invalid += 1;
            tracing::warn!("failed validation: {} (from {:?})", result.url, input);
        }
        print_result(&result, json)?;
    }

    if strict && invalid > 0 {
        bail!("{invalid} of {} URLs failed validation", inputs.len());
    }
    Ok(())
}

fn print_result(result: &Refanged, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        println!("{}", result.url);
    }
    Ok(())
}

/// Read one candidate URL per line from stdin, skipping blank lines.
fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
