//! Defanging reversal: rewrite `hxxp`/bracket patterns back to URL form.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Defanged scheme token, matched anywhere in the string.
static RE_DEFANGED_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)hxxp(s?)").expect("valid defanged scheme regex"));

/// Prefix check deciding whether `http://` must be prepended.
static RE_SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("valid scheme prefix regex"));

/// Literal bracket rewrites, applied after the scheme token rewrite.
/// Mutually independent: no pattern is a substring of another's replacement.
const BRACKET_REWRITES: &[(&str, &str)] = &[
    ("[.]", "."),
    ("(.)", "."),
    ("[@]", "@"),
    ("[:]", ":"),
    ("[//]", "//"),
    ("[/]", "/"),
];

/// Rewrites a defanged URL into plain form and guarantees a scheme prefix.
///
/// Total over its input: `None` and whitespace-only input yield an empty
/// string, everything else yields best-effort rewritten text. The result may
/// still fail [`validate`](super::validate); this function never does.
///
/// Rewrites, in order, each applied to every occurrence:
/// - `hxxp`/`hxxps` → `http`/`https`. Matched case-insensitively, always
///   emitted lowercase; only the token itself is touched, so host and path
///   keep their case.
/// - `[.]`, `(.)`, `[@]`, `[:]`, `[//]`, `[/]` replaced literally.
/// - If the result still has no `http://`/`https://` prefix, `http://` is
///   prepended.
pub fn normalize(input: Option<&str>) -> String {
    let trimmed = match input {
        Some(s) => s.trim(),
        None => return String::new(),
    };
    if trimmed.is_empty() {
        return String::new();
    }

    let mut url = RE_DEFANGED_SCHEME
        .replace_all(trimmed, |caps: &Captures| {
            if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
                "https"
            } else {
                "http"
            }
        })
        .into_owned();

    for (pattern, replacement) in BRACKET_REWRITES {
        url = url.replace(pattern, replacement);
    }

    if !RE_SCHEME_PREFIX.is_match(&url) {
        url.insert_str(0, "http://");
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_input() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("   ")), "");
        assert_eq!(normalize(Some("\t\n")), "");
    }

    #[test]
    fn basic_hxxp() {
        assert_eq!(
            normalize(Some("hxxp://example[.]com")),
            "http://example.com"
        );
    }

    #[test]
    fn hxxps_with_subdomain() {
        assert_eq!(
            normalize(Some("hxxps://test[.]example[.]com")),
            "https://test.example.com"
        );
    }

    #[test]
    fn missing_scheme_gets_http_prefix() {
        assert_eq!(normalize(Some("example[.]com")), "http://example.com");
    }

    #[test]
    fn scheme_token_lowercased_rest_preserved() {
        assert_eq!(
            normalize(Some("HxXpS://ExAmPlE[.]CoM")),
            "https://ExAmPlE.CoM"
        );
    }

    #[test]
    fn userinfo_port_path_query() {
        assert_eq!(
            normalize(Some("hxxps://user[@]example[.]com:8080/path?query=value")),
            "https://user@example.com:8080/path?query=value"
        );
    }

    #[test]
    fn ipv4_host() {
        assert_eq!(
            normalize(Some("hxxp://192[.]168[.]1[.]1")),
            "http://192.168.1.1"
        );
    }

    #[test]
    fn paren_dot_variant() {
        assert_eq!(
            normalize(Some("hxxp://evil(.)example(.)org/login")),
            "http://evil.example.org/login"
        );
    }

    #[test]
    fn bracketed_colon_and_slashes() {
        assert_eq!(
            normalize(Some("hxxps[:]//example[.]com[/]path")),
            "https://example.com/path"
        );
        assert_eq!(
            normalize(Some("hxxps:[//]example[.]com")),
            "https://example.com"
        );
    }

    #[test]
    fn hxxp_rewritten_everywhere() {
        // The token rewrite is global, not anchored to the scheme position.
        assert_eq!(
            normalize(Some("hxxp://hxxp[.]example[.]com")),
            "http://http.example.com"
        );
    }

    #[test]
    fn already_valid_unchanged() {
        assert_eq!(
            normalize(Some("https://already-valid.com")),
            "https://already-valid.com"
        );
    }

    #[test]
    fn uppercase_scheme_not_double_prefixed() {
        // The prefix check is case-insensitive, so no second scheme is added.
        assert_eq!(
            normalize(Some("HTTPS://example.com")),
            "HTTPS://example.com"
        );
    }

    #[test]
    fn idempotent_on_own_output() {
        for input in [
            "hxxp://example[.]com",
            "hxxps://user[@]example[.]com:8080/path?query=value",
            "example[.]com",
            "https://already-valid.com",
        ] {
            let once = normalize(Some(input));
            assert_eq!(normalize(Some(once.as_str())), once, "idempotence for {input}");
        }
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(
            normalize(Some("  hxxp://example[.]com\n")),
            "http://example.com"
        );
    }
}
