//! Anchorite - Headless link-editing dialog engine
//!
//! A host text editor embeds this crate to let users attach a hyperlink or
//! mailto address to selected text, or insert a new linked text fragment,
//! through a two-field modal form (URL/email plus display text). The crate
//! owns the decision logic - URL classification and normalization, the
//! per-field setup/validate/commit lifecycle, and the edit-vs-insert
//! session state machine - while the host keeps the rendering, the document
//! model, and the toolbar wiring behind the [`AnchorElement`] and
//! [`DocumentHost`] traits.
//!
//! # Features
//! - Classify link targets: scheme-qualified URL, bare domain, email address
//! - Normalize between the stored `href` and the value shown in the field
//! - Validate the URL field with inline, localized error messages
//! - Edit an existing anchor in place or insert a freshly created one
//! - Honor a host-set read-only marker on protected elements
//!
//! # Example
//! ```ignore
//! use anchorite::{LinkDialog, LinkDialogStrings};
//!
//! let mut dialog = LinkDialog::new(LinkDialogStrings::en());
//! dialog.open(&mut host);                    // seeds fields from the selection
//! dialog.url.value = "example.com".to_string();
//! dialog.confirm(&mut host)?;                // validates, commits, inserts
//! ```

mod dialog;
mod error;
mod host;
mod lang;
mod link;

pub use dialog::{
    DialogDescriptor, DialogProvider, DialogState, DisplayTextField, LinkDialog, UrlField,
};
pub use error::ValidationError;
pub use host::{
    AnchorElement, DocumentHost, ATTR_HREF, ATTR_TARGET, DATA_HREF_READONLY, TARGET_NEW_TAB,
};
pub use lang::{LinkDialogStrings, Locale};
pub use link::{decode_for_editing, encode_for_storage, has_scheme, is_email_like, is_valid_domain};
