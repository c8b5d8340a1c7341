//! Narrow host-facing traits
//!
//! The dialog core never reaches into the host editor's document model;
//! everything it needs from the host goes through these two traits. The
//! host implements them over whatever element handles its document uses.

// ─────────────────────────────────────────────────────────────────────────────
// Persisted attribute names
// ─────────────────────────────────────────────────────────────────────────────

/// Attribute holding the link destination.
pub const ATTR_HREF: &str = "href";

/// Attribute holding the link target window.
pub const ATTR_TARGET: &str = "target";

/// `target` value marking links that open in a new tab.
pub const TARGET_NEW_TAB: &str = "_blank";

/// Data attribute marking an element whose URL must not be user-edited.
/// Boolean-ish: any non-empty value counts as set. Read, never written.
pub const DATA_HREF_READONLY: &str = "href-readonly";

// ─────────────────────────────────────────────────────────────────────────────
// Traits
// ─────────────────────────────────────────────────────────────────────────────

/// An anchor-like element in the host document.
///
/// Handles are expected to be cheap: in edit mode the same element may be
/// read during field setup and written during commit within one session.
pub trait AnchorElement {
    /// Read a plain string attribute.
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Write a plain string attribute.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// The element's current text content.
    fn get_text(&self) -> String;

    /// Replace the element's text content.
    fn set_text(&mut self, value: &str);

    /// Read an out-of-band data attribute (e.g. [`DATA_HREF_READONLY`]).
    fn get_data_attribute(&self, name: &str) -> Option<String>;
}

/// The host editor surface a dialog session drives.
pub trait DocumentHost {
    /// Handle type for anchor elements in the host document.
    type Elem: AnchorElement;

    /// Text of the current selection, if there is one.
    fn selected_text(&self) -> Option<String>;

    /// The anchor element enclosing the current selection, if any.
    ///
    /// Implementations must only return genuine anchor elements; anything
    /// returned here is mutated in place on confirm.
    fn anchor_at_selection(&mut self) -> Option<Self::Elem>;

    /// Create a detached anchor element.
    fn create_anchor(&mut self) -> Self::Elem;

    /// Insert a detached element into the document at the current selection.
    fn insert_at_selection(&mut self, element: Self::Elem);
}
