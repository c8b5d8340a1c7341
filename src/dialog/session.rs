//! Link dialog session state machine
//!
//! One session per dialog invocation: opening selects (or creates) the
//! target anchor element and seeds both fields, confirming validates and
//! commits the fields and inserts a newly created element, cancelling
//! discards everything without touching the document.

use log::debug;

use crate::error::ValidationError;
use crate::host::{AnchorElement, DocumentHost, ATTR_HREF, ATTR_TARGET, TARGET_NEW_TAB};
use crate::lang::LinkDialogStrings;

use super::fields::{DisplayTextField, UrlField};

// ─────────────────────────────────────────────────────────────────────────────
// Capability Surface
// ─────────────────────────────────────────────────────────────────────────────

/// Static capability data a host registry needs to mount a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDescriptor {
    /// Dialog window title.
    pub title: String,
    /// Toolbar button label.
    pub button_label: String,
    /// Attributes the dialog writes on anchor elements.
    pub allowed_attributes: &'static [&'static str],
    /// Minimum dialog width in pixels.
    pub min_width: u32,
    /// Minimum dialog height in pixels.
    pub min_height: u32,
    /// Whether the host may let the user resize the dialog.
    pub resizable: bool,
}

/// A modal dialog the host can register by capability and drive through
/// its lifecycle, without knowing the concrete dialog type.
pub trait DialogProvider<H: DocumentHost> {
    /// Capability data for mounting the dialog.
    fn descriptor(&self) -> DialogDescriptor;

    /// Open a session against the host's current selection.
    fn open(&mut self, host: &mut H);

    /// Validate the current field values.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Validate, then commit the session to the host document.
    fn confirm(&mut self, host: &mut H) -> Result<(), ValidationError>;

    /// Discard the session without committing.
    fn cancel(&mut self);
}

// ─────────────────────────────────────────────────────────────────────────────
// Session State
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle state of a dialog session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// No session in flight.
    #[default]
    Closed,
    /// Selecting the target element and seeding fields.
    Opening,
    /// Fields are editable; validation may run per keystroke or blur.
    Open,
    /// Committing field values to the target element.
    Committing,
}

/// A link dialog session.
///
/// The session owns the target element handle, the edit-vs-insert mode,
/// and both field controllers for the duration of one invocation. The
/// string catalog is injected at construction; the session never reads
/// ambient configuration.
#[derive(Debug)]
pub struct LinkDialog<E: AnchorElement> {
    state: DialogState,
    target: Option<E>,
    insert_mode: bool,
    strings: LinkDialogStrings,
    /// URL/email input field.
    pub url: UrlField,
    /// Display-text input field.
    pub text: DisplayTextField,
}

impl<E: AnchorElement> LinkDialog<E> {
    /// Create a dialog with the given string catalog. No session is in
    /// flight until [`open`](Self::open) is called.
    pub fn new(strings: LinkDialogStrings) -> Self {
        Self {
            state: DialogState::Closed,
            target: None,
            insert_mode: false,
            strings,
            url: UrlField::default(),
            text: DisplayTextField::default(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Whether the session will insert a newly created element on confirm.
    pub fn insert_mode(&self) -> bool {
        self.insert_mode
    }

    /// The injected string catalog.
    pub fn strings(&self) -> &LinkDialogStrings {
        &self.strings
    }

    /// Capability data for mounting the dialog in a host registry.
    pub fn descriptor(&self) -> DialogDescriptor {
        DialogDescriptor {
            title: self.strings.title.clone(),
            button_label: self.strings.button_label.clone(),
            allowed_attributes: &[ATTR_HREF, ATTR_TARGET],
            min_width: 400,
            min_height: 100,
            resizable: false,
        }
    }

    /// Open a session against the host's current selection.
    ///
    /// An anchor enclosing the selection puts the session in edit mode and
    /// is mutated in place on confirm. Otherwise a fresh anchor is created
    /// with the new-tab target marker, seeded with the selection text, and
    /// inserted on confirm.
    pub fn open<H>(&mut self, host: &mut H)
    where
        H: DocumentHost<Elem = E>,
    {
        self.state = DialogState::Opening;

        // Field state is per session
        self.url = UrlField::default();
        self.text = DisplayTextField::default();

        let target = match host.anchor_at_selection() {
            Some(element) => {
                self.insert_mode = false;
                element
            }
            None => {
                let mut element = host.create_anchor();
                element.set_attribute(ATTR_TARGET, TARGET_NEW_TAB);
                if let Some(text) = host.selected_text() {
                    element.set_text(&text);
                }
                self.insert_mode = true;
                element
            }
        };

        debug!(
            "link dialog opened in {} mode",
            if self.insert_mode { "insert" } else { "edit" }
        );

        self.url.setup(&target, &self.strings);
        self.text.setup(&target);
        self.target = Some(target);
        self.state = DialogState::Open;
    }

    /// Validate the current field values.
    ///
    /// The display-text field accepts anything, so this is the URL field's
    /// verdict. Hosts may call this per keystroke or blur; a failing result
    /// blocks confirmation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.url.validate()
    }

    /// Validate, then commit both fields and close the session.
    ///
    /// A failing validation leaves the session open with nothing committed.
    /// The URL field commits first: its fallback label can still be
    /// overridden by the display-text commit.
    pub fn confirm<H>(&mut self, host: &mut H) -> Result<(), ValidationError>
    where
        H: DocumentHost<Elem = E>,
    {
        self.validate()?;

        self.state = DialogState::Committing;

        if let Some(target) = self.target.as_mut() {
            self.url.commit(target);
            self.text.commit(target);
        }

        if self.insert_mode {
            if let Some(target) = self.target.take() {
                host.insert_at_selection(target);
            }
        }

        debug!(
            "link dialog committed ({})",
            if self.insert_mode { "inserted new element" } else { "edited in place" }
        );

        self.target = None;
        self.state = DialogState::Closed;
        Ok(())
    }

    /// Discard the session without committing.
    ///
    /// A newly created element is dropped unattached; an existing element
    /// is left exactly as it was.
    pub fn cancel(&mut self) {
        debug!("link dialog cancelled");
        self.target = None;
        self.insert_mode = false;
        self.state = DialogState::Closed;
    }
}

impl<H: DocumentHost> DialogProvider<H> for LinkDialog<H::Elem> {
    fn descriptor(&self) -> DialogDescriptor {
        LinkDialog::descriptor(self)
    }

    fn open(&mut self, host: &mut H) {
        LinkDialog::open(self, host);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        LinkDialog::validate(self)
    }

    fn confirm(&mut self, host: &mut H) -> Result<(), ValidationError> {
        LinkDialog::confirm(self, host)
    }

    fn cancel(&mut self) {
        LinkDialog::cancel(self);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DATA_HREF_READONLY;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct ElementData {
        attributes: HashMap<String, String>,
        data_attributes: HashMap<String, String>,
        text: String,
    }

    /// Shared element handle, like a host document node reference.
    #[derive(Debug, Clone, Default)]
    struct FakeElement(Rc<RefCell<ElementData>>);

    impl FakeElement {
        fn mark_readonly(&self) {
            self.0
                .borrow_mut()
                .data_attributes
                .insert(DATA_HREF_READONLY.to_string(), "1".to_string());
        }
    }

    impl AnchorElement for FakeElement {
        fn get_attribute(&self, name: &str) -> Option<String> {
            self.0.borrow().attributes.get(name).cloned()
        }
        fn set_attribute(&mut self, name: &str, value: &str) {
            self.0
                .borrow_mut()
                .attributes
                .insert(name.to_string(), value.to_string());
        }
        fn get_text(&self) -> String {
            self.0.borrow().text.clone()
        }
        fn set_text(&mut self, value: &str) {
            self.0.borrow_mut().text = value.to_string();
        }
        fn get_data_attribute(&self, name: &str) -> Option<String> {
            self.0.borrow().data_attributes.get(name).cloned()
        }
    }

    #[derive(Default)]
    struct FakeHost {
        selection: Option<String>,
        anchor: Option<FakeElement>,
        inserted: Vec<FakeElement>,
    }

    impl DocumentHost for FakeHost {
        type Elem = FakeElement;

        fn selected_text(&self) -> Option<String> {
            self.selection.clone()
        }
        fn anchor_at_selection(&mut self) -> Option<FakeElement> {
            self.anchor.clone()
        }
        fn create_anchor(&mut self) -> FakeElement {
            FakeElement::default()
        }
        fn insert_at_selection(&mut self, element: FakeElement) {
            self.inserted.push(element);
        }
    }

    #[test]
    fn test_insert_mode_end_to_end() {
        let mut host = FakeHost {
            selection: Some("click here".to_string()),
            ..Default::default()
        };
        let mut dialog = LinkDialog::new(LinkDialogStrings::en());

        dialog.open(&mut host);
        assert!(dialog.insert_mode());
        assert_eq!(dialog.state(), DialogState::Open);
        assert_eq!(dialog.url.value, "");
        assert_eq!(dialog.text.value, "click here");

        dialog.url.value = "example.com".to_string();
        dialog.confirm(&mut host).unwrap();

        assert_eq!(dialog.state(), DialogState::Closed);
        assert_eq!(host.inserted.len(), 1);
        let inserted = &host.inserted[0];
        assert_eq!(
            inserted.get_attribute(ATTR_HREF).as_deref(),
            Some("http://example.com")
        );
        assert_eq!(
            inserted.get_attribute(ATTR_TARGET).as_deref(),
            Some(TARGET_NEW_TAB)
        );
        assert_eq!(inserted.get_text(), "click here");
    }

    #[test]
    fn test_edit_mode_end_to_end() {
        let mut anchor = FakeElement::default();
        anchor.set_attribute(ATTR_HREF, "mailto:a@b.com");
        anchor.set_text("mail");
        let mut host = FakeHost {
            anchor: Some(anchor.clone()),
            ..Default::default()
        };

        let mut dialog = LinkDialog::new(LinkDialogStrings::en());
        dialog.open(&mut host);

        assert!(!dialog.insert_mode());
        assert_eq!(dialog.url.value, "a@b.com");
        assert_eq!(dialog.text.value, "mail");

        // Clearing the display-text field must not blank the label
        dialog.text.value.clear();
        dialog.confirm(&mut host).unwrap();

        assert_eq!(
            anchor.get_attribute(ATTR_HREF).as_deref(),
            Some("mailto:a@b.com")
        );
        assert_eq!(anchor.get_text(), "mail");
        // Existing elements keep their target attribute untouched
        assert!(anchor.get_attribute(ATTR_TARGET).is_none());
        assert!(host.inserted.is_empty());
    }

    #[test]
    fn test_readonly_element_is_never_altered() {
        let mut anchor = FakeElement::default();
        anchor.set_attribute(ATTR_HREF, "https://example.com");
        anchor.set_text("site");
        anchor.mark_readonly();
        let mut host = FakeHost {
            anchor: Some(anchor.clone()),
            ..Default::default()
        };

        let mut dialog = LinkDialog::new(LinkDialogStrings::en());
        dialog.open(&mut host);

        assert!(dialog.url.disabled);
        assert_eq!(dialog.url.hint.as_deref(), Some("URL cannot be changed"));

        dialog.url.value = "https://other.com".to_string();
        dialog.confirm(&mut host).unwrap();

        assert_eq!(
            anchor.get_attribute(ATTR_HREF).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_failed_validation_blocks_commit() {
        let mut host = FakeHost::default();
        let mut dialog = LinkDialog::new(LinkDialogStrings::en());

        dialog.open(&mut host);
        assert_eq!(dialog.validate(), Err(ValidationError::EmptyInput));

        dialog.url.value = "not a domain!".to_string();
        assert_eq!(
            dialog.confirm(&mut host),
            Err(ValidationError::InvalidDomain)
        );

        // Session stays open, nothing was inserted
        assert_eq!(dialog.state(), DialogState::Open);
        assert!(host.inserted.is_empty());

        // Fixing the value lets the confirm through
        dialog.url.value = "example.com".to_string();
        dialog.confirm(&mut host).unwrap();
        assert_eq!(host.inserted.len(), 1);
    }

    #[test]
    fn test_cancel_discards_new_element() {
        let mut host = FakeHost {
            selection: Some("draft".to_string()),
            ..Default::default()
        };
        let mut dialog = LinkDialog::new(LinkDialogStrings::en());

        dialog.open(&mut host);
        dialog.url.value = "example.com".to_string();
        dialog.cancel();

        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(host.inserted.is_empty());
    }

    #[test]
    fn test_reopening_resets_field_state() {
        let anchor = FakeElement::default();
        anchor.mark_readonly();
        let mut host = FakeHost {
            anchor: Some(anchor),
            ..Default::default()
        };

        let mut dialog = LinkDialog::new(LinkDialogStrings::en());
        dialog.open(&mut host);
        assert!(dialog.url.disabled);
        dialog.cancel();

        // Next session targets a fresh element; the disabled flag must not leak
        host.anchor = None;
        dialog.open(&mut host);
        assert!(!dialog.url.disabled);
        assert!(dialog.url.hint.is_none());
        assert!(dialog.insert_mode());
    }

    #[test]
    fn test_descriptor() {
        let dialog: LinkDialog<FakeElement> = LinkDialog::new(LinkDialogStrings::en());
        let descriptor = dialog.descriptor();

        assert_eq!(descriptor.title, "Insert/edit link");
        assert_eq!(descriptor.button_label, "Add a link");
        assert_eq!(descriptor.allowed_attributes, &[ATTR_HREF, ATTR_TARGET]);
        assert_eq!(descriptor.min_width, 400);
        assert!(!descriptor.resizable);
    }

    #[test]
    fn test_dialog_provider_object_safety() {
        // The session is usable through the capability interface alone
        let mut dialog = LinkDialog::new(LinkDialogStrings::nb());
        let provider: &mut dyn DialogProvider<FakeHost> = &mut dialog;

        let mut host = FakeHost {
            selection: Some("lenke".to_string()),
            ..Default::default()
        };
        provider.open(&mut host);
        assert_eq!(provider.validate(), Err(ValidationError::EmptyInput));
        provider.cancel();
        assert_eq!(provider.descriptor().title, "Sett inn/rediger lenke");
    }
}
