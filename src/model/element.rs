//! Typed text elements of the source stream.

use serde::{Deserialize, Serialize};

/// A single element in the extractor's ordered text stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextElement {
    /// A section heading. Opens a new section in the simplified output.
    SectionHeader {
        /// Heading text.
        text: String,
        /// Heading level reported by the extractor. Unreliable; the
        /// pipeline re-infers levels from the title text instead.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u32>,
    },

    /// A list entry, optionally carrying its marker (e.g. `"(a)"`).
    ListItem {
        /// Entry text, marker not included.
        text: String,
        /// List marker as printed in the source.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        marker: Option<String>,
    },

    /// A labeled text block. The label `"footnote"` marks footnotes;
    /// anything else is an ordinary paragraph.
    Text {
        /// Block text.
        text: String,
        /// Semantic label assigned by the extractor.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },

    /// Any element kind this pipeline does not understand. Skipped.
    #[serde(other)]
    Unknown,
}

impl TextElement {
    /// Create a section header element.
    pub fn section_header(text: impl Into<String>) -> Self {
        Self::SectionHeader {
            text: text.into(),
            level: None,
        }
    }

    /// Create a list item element.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::ListItem {
            text: text.into(),
            marker: None,
        }
    }

    /// Create a list item element with a marker.
    pub fn marked_list_item(text: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::ListItem {
            text: text.into(),
            marker: Some(marker.into()),
        }
    }

    /// Create an unlabeled text element.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            label: None,
        }
    }

    /// Create a labeled text element.
    pub fn labeled_text(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            label: Some(label.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_elements() {
        let json = r#"[
            {"type": "section_header", "text": "IAS 36", "level": 3},
            {"type": "list_item", "text": "1 Objective", "marker": "(a)"},
            {"type": "text", "text": "See note 4", "label": "footnote"}
        ]"#;

        let elements: Vec<TextElement> = serde_json::from_str(json).unwrap();
        assert_eq!(elements.len(), 3);
        assert!(matches!(
            &elements[0],
            TextElement::SectionHeader { text, level: Some(3) } if text == "IAS 36"
        ));
        assert!(matches!(
            &elements[1],
            TextElement::ListItem { marker: Some(m), .. } if m == "(a)"
        ));
        assert!(matches!(
            &elements[2],
            TextElement::Text { label: Some(l), .. } if l == "footnote"
        ));
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        // Element kinds added upstream must not break deserialization.
        let json = r#"{"type": "picture"}"#;
        let element: TextElement = serde_json::from_str(json).unwrap();
        assert_eq!(element, TextElement::Unknown);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"type": "list_item", "text": "plain"}"#;
        let element: TextElement = serde_json::from_str(json).unwrap();
        assert_eq!(element, TextElement::list_item("plain"));
    }
}
