//! Field controllers for the link dialog
//!
//! Each field owns its transient edited value and the setup → validate →
//! commit contract against the target element. The host dialog shell binds
//! its input widgets to `value` and calls the lifecycle methods at the
//! points the session dictates.

use log::debug;

use crate::error::ValidationError;
use crate::host::{AnchorElement, ATTR_HREF, DATA_HREF_READONLY};
use crate::lang::LinkDialogStrings;
use crate::link::{decode_for_editing, encode_for_storage, is_valid_domain};

// ─────────────────────────────────────────────────────────────────────────────
// URL Field
// ─────────────────────────────────────────────────────────────────────────────

/// Controller for the URL/email input field.
#[derive(Debug, Clone, Default)]
pub struct UrlField {
    /// Current edited value, bound to the host's input widget.
    pub value: String,
    /// Whether the field is disabled (read-only element).
    pub disabled: bool,
    /// Hint annotating a disabled field.
    pub hint: Option<String>,
}

impl UrlField {
    /// Validate the raw field value.
    ///
    /// Runs against the value as typed, before any storage encoding.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.value.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if !is_valid_domain(&self.value) {
            return Err(ValidationError::InvalidDomain);
        }
        Ok(())
    }

    /// Seed the field from the element's stored `href`.
    ///
    /// A read-only element disables the field and annotates it with the
    /// catalog's read-only hint instead of leaving it editable.
    pub fn setup(&mut self, element: &impl AnchorElement, strings: &LinkDialogStrings) {
        let href = element.get_attribute(ATTR_HREF).unwrap_or_default();
        self.value = decode_for_editing(&href);

        if is_readonly(element) {
            debug!("URL field disabled: element carries the read-only marker");
            self.disabled = true;
            self.hint = Some(strings.url_readonly.clone());
        }
    }

    /// Write the edited value back to the element.
    ///
    /// No-op while disabled or while the trimmed value is empty. Otherwise
    /// the storage-encoded form goes to `href`, and the trimmed raw value
    /// becomes the element text when the element has none.
    pub fn commit(&self, element: &mut impl AnchorElement) {
        if self.disabled {
            return;
        }

        let edited = self.value.trim();
        if edited.is_empty() {
            return;
        }

        element.set_attribute(ATTR_HREF, &encode_for_storage(edited));

        if element.get_text().is_empty() {
            element.set_text(edited);
        }
    }
}

/// Whether the element carries the read-only marker.
fn is_readonly(element: &impl AnchorElement) -> bool {
    element
        .get_data_attribute(DATA_HREF_READONLY)
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}

// ─────────────────────────────────────────────────────────────────────────────
// Display-Text Field
// ─────────────────────────────────────────────────────────────────────────────

/// Controller for the display-text input field.
#[derive(Debug, Clone, Default)]
pub struct DisplayTextField {
    /// Current edited value, bound to the host's input widget.
    pub value: String,
}

impl DisplayTextField {
    /// Seed the field from the element's text content, trimmed.
    pub fn setup(&mut self, element: &impl AnchorElement) {
        self.value = element.get_text().trim().to_string();
    }

    /// Overwrite the element text with a non-empty field value.
    ///
    /// An empty value is a no-op, so clearing the field never blanks an
    /// existing label.
    pub fn commit(&self, element: &mut impl AnchorElement) {
        if !self.value.is_empty() {
            element.set_text(&self.value);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
