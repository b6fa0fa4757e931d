//! Element classification.

use super::document::ContentItem;
use crate::model::TextElement;

/// Label that marks a footnote text element.
const FOOTNOTE_LABEL: &str = "footnote";

/// Map a source element to the content item it produces, if any.
///
/// Section headers yield `None`: they are section boundaries, handled by
/// the section builder rather than classified. Unknown element kinds also
/// yield `None` and are silently skipped. The mapping is pure and never
/// fails.
pub fn classify(element: &TextElement) -> Option<ContentItem> {
    match element {
        TextElement::SectionHeader { .. } | TextElement::Unknown => None,
        TextElement::ListItem { text, marker } => {
            Some(classify_list_item(text, marker.as_deref()))
        }
        TextElement::Text { text, label } => {
            if label.as_deref() == Some(FOOTNOTE_LABEL) {
                Some(ContentItem::footnote(text.clone()))
            } else {
                Some(ContentItem::paragraph(text.clone()))
            }
        }
    }
}

/// Classify a list item, extracting a paragraph number and reclassifying
/// lettered entries as sub-items.
fn classify_list_item(text: &str, marker: Option<&str>) -> ContentItem {
    let (number, text) = split_leading_number(text);

    if let Some(marker) = marker.filter(|m| m.starts_with('(')) {
        return ContentItem::sub_item(text, marker);
    }

    ContentItem::Paragraph { text, number }
}

/// Split a leading digit run followed by a space into a paragraph number.
///
/// Returns the original text untouched when no number can be extracted:
/// no space after the digits, non-digit characters in the run, or a run
/// too large for `u32`.
fn split_leading_number(text: &str) -> (Option<u32>, String) {
    let Some((prefix, rest)) = text.split_once(' ') else {
        return (None, text.to_string());
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return (None, text.to_string());
    }
    match prefix.parse::<u32>() {
        Ok(number) => (Some(number), rest.to_string()),
        Err(_) => (None, text.to_string()),
    }
}
