//! Link target classification
//!
//! Pure predicates shared by the href transcoder and the URL field
//! validation: whether a string carries a scheme, whether it reads as an
//! email address, and whether its hostname portion looks like a domain.

use once_cell::sync::Lazy;
use regex::Regex;
use url::{ParseError, Url};

// ─────────────────────────────────────────────────────────────────────────────
// Patterns
// ─────────────────────────────────────────────────────────────────────────────

/// One or more ASCII letters followed by `:` at the start of the string.
static SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z]+:").unwrap());

/// `localpart@domain.tld`, whole string. Both sides accept the upper half of
/// the Latin-1 supplement in addition to the usual ASCII set, so addresses
/// with Western European accented letters pass.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9\x{C0}-\x{FF}._%+-]+@[a-z0-9\x{C0}-\x{FF}.-]+\.[a-z]{2,}$").unwrap()
});

/// Hostname shape: dot/dash-separated alphanumeric labels ending in a
/// 2-6 letter top-level label.
static HOSTNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9]+([.-][a-z0-9]+)*\.[a-z]{2,6}$").unwrap());

// ─────────────────────────────────────────────────────────────────────────────
// Predicates
// ─────────────────────────────────────────────────────────────────────────────

/// Check whether a link target starts with a scheme (`https:`, `mailto:`, ...).
///
/// Purely syntactic; the scheme is not checked against any registry.
pub fn has_scheme(s: &str) -> bool {
    SCHEME.is_match(s)
}

/// Check whether a string reads as a plain email address.
pub fn is_email_like(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Validate the hostname portion of a link target.
///
/// The input is parsed as a URL reference first; anything unparseable (such
/// as whitespace in the host) fails outright. Users typically type a bare
/// `example.com` rather than a full URL, so scheme-less input is re-parsed
/// against an assumed `https://` prefix purely to extract a hostname.
/// Paths, queries and fragments are ignored: only the hostname has to match.
pub fn is_valid_domain(s: &str) -> bool {
    match parse_url_reference(s) {
        Some(url) => HOSTNAME.is_match(url.host_str().unwrap_or_default()),
        None => false,
    }
}

/// Parse an absolute or loosely-formed (scheme-less) URL reference.
fn parse_url_reference(s: &str) -> Option<Url> {
    match Url::parse(s) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", s)).ok(),
        Err(_) => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
