//! Localized strings for the link dialog
//!
//! The dialog core never reads an ambient language catalog; the host passes
//! a [`LinkDialogStrings`] table when constructing a session. Tables for
//! English and Norwegian Bokmål are built in, and hosts with their own
//! catalog pipeline can load a table from JSON instead.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Locale Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Built-in dialog locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Nb,
}

impl Locale {
    /// Get the display name for the locale.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Nb => "Norsk bokmål",
        }
    }

    /// Get all built-in locales.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Nb]
    }

    /// Get the string table for the locale.
    pub fn strings(&self) -> LinkDialogStrings {
        match self {
            Locale::En => LinkDialogStrings::en(),
            Locale::Nb => LinkDialogStrings::nb(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// String Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// The label and message strings the dialog surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDialogStrings {
    /// Dialog window title.
    pub title: String,
    /// Label above the URL field.
    pub url_label: String,
    /// Hint shown on a disabled (read-only) URL field.
    pub url_readonly: String,
    /// Label above the display-text field.
    pub display_text_label: String,
    /// Toolbar button label.
    pub button_label: String,
    /// Inline error for an empty URL field.
    pub missing_url: String,
    /// Inline error for a URL whose hostname does not validate.
    pub invalid_url: String,
}

impl Default for LinkDialogStrings {
    fn default() -> Self {
        Self::en()
    }
}

impl LinkDialogStrings {
    /// The English string table.
    pub fn en() -> Self {
        Self {
            title: "Insert/edit link".to_string(),
            url_label: "URL or email address".to_string(),
            url_readonly: "URL cannot be changed".to_string(),
            display_text_label: "Text to display".to_string(),
            button_label: "Add a link".to_string(),
            missing_url: "URL cannot be empty.".to_string(),
            invalid_url: "Invalid URL.".to_string(),
        }
    }

    /// The Norwegian Bokmål string table.
    pub fn nb() -> Self {
        Self {
            title: "Sett inn/rediger lenke".to_string(),
            url_label: "URL eller e-postadresse".to_string(),
            url_readonly: "URL kan ikke endres".to_string(),
            display_text_label: "Visningstekst".to_string(),
            button_label: "Sett inn lenke".to_string(),
            missing_url: "URL kan ikke være blank.".to_string(),
            invalid_url: "Ugyldig URL.".to_string(),
        }
    }

    /// Parse a string table from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the string table to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(LinkDialogStrings::default(), LinkDialogStrings::en());
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_locale_strings_lookup() {
        assert_eq!(Locale::En.strings().title, "Insert/edit link");
        assert_eq!(Locale::Nb.strings().title, "Sett inn/rediger lenke");
    }

    #[test]
    fn test_locale_display_names() {
        for locale in Locale::all() {
            assert!(!locale.display_name().is_empty());
        }
    }

    #[test]
    fn test_json_round_trip() {
        let strings = LinkDialogStrings::nb();
        let json = strings.to_json().unwrap();
        let parsed = LinkDialogStrings::from_json(&json).unwrap();
        assert_eq!(parsed, strings);
    }

    #[test]
    fn test_from_json_rejects_incomplete_table() {
        assert!(LinkDialogStrings::from_json(r#"{"title": "only a title"}"#).is_err());
    }
}
