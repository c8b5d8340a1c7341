//! The link dialog: field controllers and the per-invocation session
//!
//! [`LinkDialog`] owns one edit-or-insert session at a time and drives the
//! two field controllers through their setup/validate/commit lifecycle.
//! Hosts that keep a registry of dialogs can hold it through the
//! [`DialogProvider`] capability trait instead of the concrete type.

mod fields;
mod session;

pub use fields::{DisplayTextField, UrlField};
pub use session::{DialogDescriptor, DialogProvider, DialogState, LinkDialog};
