//! Simplified output document types.

use serde::{Deserialize, Serialize};

/// One content item owned by a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A text paragraph, optionally carrying its printed number.
    Paragraph {
        /// Paragraph text.
        text: String,
        /// Printed paragraph number, when one was stripped from the text.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        number: Option<u32>,
    },

    /// A lettered sub-item such as `(a)`.
    SubItem {
        /// Item text.
        text: String,
        /// The source marker, parentheses included.
        marker: String,
    },

    /// A footnote.
    Footnote {
        /// Footnote text.
        text: String,
    },

    /// A table. The caption serializes as `null` when absent.
    Table {
        /// Caption text.
        caption: Option<String>,
        /// Rows of cell text; the first row is treated as the header.
        rows: Vec<Vec<String>>,
    },
}

impl ContentItem {
    /// Create an unnumbered paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            text: text.into(),
            number: None,
        }
    }

    /// Create a numbered paragraph.
    pub fn numbered_paragraph(text: impl Into<String>, number: u32) -> Self {
        Self::Paragraph {
            text: text.into(),
            number: Some(number),
        }
    }

    /// Create a sub-item.
    pub fn sub_item(text: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::SubItem {
            text: text.into(),
            marker: marker.into(),
        }
    }

    /// Create a footnote.
    pub fn footnote(text: impl Into<String>) -> Self {
        Self::Footnote { text: text.into() }
    }

    /// Create a table.
    pub fn table(caption: Option<String>, rows: Vec<Vec<String>>) -> Self {
        Self::Table { caption, rows }
    }

    /// Check if this item is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table { .. })
    }
}

/// A titled grouping of content items, level 1 (top) or level 2 (nested).
///
/// Only level-1 sections carry `subsections`; the tree is exactly two
/// levels deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title; the implicit default section has an empty title.
    pub title: String,

    /// Inferred level, 1 or 2.
    pub level: u32,

    /// Content items in source encounter order.
    pub content: Vec<ContentItem>,

    /// Nested subsections. Present (possibly empty) on assembled level-1
    /// sections; absent on level-2 and flat-variant sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsections: Option<Vec<Section>>,
}

impl Section {
    /// Create an empty level-1 section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            level: 1,
            content: Vec::new(),
            subsections: None,
        }
    }

    /// Append a content item.
    pub fn push(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    /// Check if the section has no content and no subsections.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.subsections.as_ref().map_or(true, |s| s.is_empty())
    }
}

/// The simplified document handed to consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedDocument {
    /// Top-level sections in source encounter order.
    pub document: Vec<Section>,
}

impl SimplifiedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of top-level sections.
    pub fn section_count(&self) -> usize {
        self.document.len()
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Visit every section and subsection mutably, top-level first.
    ///
    /// Post-processing stages use this to apply one rule set uniformly to
    /// each section's own title and content, never across boundaries.
    pub fn for_each_section_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Section),
    {
        for section in &mut self.document {
            f(section);
            if let Some(subsections) = section.subsections.as_mut() {
                for subsection in subsections {
                    f(subsection);
                }
            }
        }
    }
}
