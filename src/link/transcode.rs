//! Conversions between the stored and edited forms of a link target
//!
//! A stored `href` is always scheme-qualified (`https://...`, `mailto:...`),
//! while the URL field shows the address the way a user would type it: email
//! addresses without their `mailto:` prefix, explicitly typed schemes
//! verbatim.

use super::classify::{has_scheme, is_email_like};

/// Prefix marking a stored email link.
const MAILTO_PREFIX: &str = "mailto:";

/// Convert a stored `href` into the value shown in the URL field.
///
/// Scheme-less stored values (data written before scheme qualification was
/// enforced) are shown with an explicit `https://`; `mailto:` links are
/// re-edited as the bare address; everything else passes through verbatim.
/// A blank attribute leaves the field blank.
pub fn decode_for_editing(stored: &str) -> String {
    let href = stored.trim();

    if href.is_empty() {
        return String::new();
    }

    if !has_scheme(href) && !is_email_like(href) {
        format!("https://{}", href)
    } else if let Some(address) = href.strip_prefix(MAILTO_PREFIX) {
        address.to_string()
    } else {
        href.to_string()
    }
}

/// Convert the edited URL field value into the `href` to store.
///
/// Email-looking values gain a `mailto:` prefix and other scheme-less
/// values gain `http://`; explicitly typed schemes pass through verbatim.
/// The default scheme added here is `http://`, not the `https://` used by
/// [`decode_for_editing`]; the two directions are asymmetric. An empty
/// value encodes to an empty string, which callers treat as "write no
/// attribute".
pub fn encode_for_storage(edited: &str) -> String {
    let href = edited.trim();

    if href.is_empty() {
        return String::new();
    }

    if !has_scheme(href) {
        if is_email_like(href) {
            format!("mailto:{}", href)
        } else {
            format!("http://{}", href)
        }
    } else {
        href.to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
