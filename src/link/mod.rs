//! Link target classification and href normalization
//!
//! This module owns the pure string logic under the link dialog: deciding
//! whether an input is a bare domain, a scheme-qualified URL, or an email
//! address, and converting between the stored representation on a link
//! attribute and the edited representation shown to the user.

mod classify;
mod transcode;

pub use classify::{has_scheme, is_email_like, is_valid_domain};
pub use transcode::{decode_for_editing, encode_for_storage};
