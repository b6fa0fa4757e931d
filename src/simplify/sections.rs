//! Section building: grouping the element stream into section records.

use std::collections::HashSet;

use log::debug;

use super::classify::classify;
use super::document::{ContentItem, Section};
use crate::model::{DocumentModel, TextElement};

/// Walk the element stream once and group elements into flat sections.
///
/// An implicit default section with an empty title is open from the start,
/// so content arriving before the first header is never dropped. Each
/// section-header element appends a fresh section and makes it current;
/// every other element is classified and appended to the current section.
/// With `dedup_headers` set, a header whose exact text was already seen is
/// skipped and the current section stays unchanged.
///
/// Tables are appended after the text pass, in the table collection's own
/// order, to the section that is current once the stream is exhausted,
/// i.e. always the last section, regardless of where the tables sat in
/// the source. This loses true document order and is kept as-is for
/// output compatibility with existing consumers.
pub fn collect_sections(model: &DocumentModel, dedup_headers: bool) -> Vec<Section> {
    let mut sections = vec![Section::new("")];
    let mut seen_headers: HashSet<&str> = HashSet::new();

    for element in &model.texts {
        if let TextElement::SectionHeader { text, .. } = element {
            if dedup_headers && !seen_headers.insert(text.as_str()) {
                debug!("skipping repeated header: {:?}", text);
                continue;
            }
            sections.push(Section::new(text.clone()));
            continue;
        }

        if let Some(item) = classify(element) {
            if let Some(current) = sections.last_mut() {
                current.push(item);
            }
        }
    }

    if let Some(current) = sections.last_mut() {
        for table in &model.tables {
            current.push(ContentItem::table(table.caption.clone(), table.grid.clone()));
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceTable;

    fn model_with(texts: Vec<TextElement>, tables: Vec<SourceTable>) -> DocumentModel {
        DocumentModel { texts, tables }
    }

    #[test]
    fn test_default_section_collects_leading_content() {
        let model = model_with(
            vec![
                TextElement::text("preamble"),
                TextElement::section_header("IAS 36"),
                TextElement::text("body"),
            ],
            vec![],
        );

        let sections = collect_sections(&model, false);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "");
        assert_eq!(sections[0].content, [ContentItem::paragraph("preamble")]);
        assert_eq!(sections[1].title, "IAS 36");
        assert_eq!(sections[1].content, [ContentItem::paragraph("body")]);
    }

    #[test]
    fn test_tables_attach_to_last_section() {
        let model = model_with(
            vec![
                TextElement::section_header("IAS 36"),
                TextElement::section_header("IFRS 9"),
            ],
            vec![SourceTable::from_rows([["A"], ["1"]])],
        );

        let sections = collect_sections(&model, false);
        assert!(sections[1].content.is_empty());
        assert_eq!(
            sections[2].content,
            [ContentItem::table(None, vec![vec!["A".into()], vec!["1".into()]])]
        );
    }

    #[test]
    fn test_dedup_skips_repeated_headers() {
        let model = model_with(
            vec![
                TextElement::section_header("Running header"),
                TextElement::text("page one"),
                TextElement::section_header("Running header"),
                TextElement::text("page two"),
            ],
            vec![],
        );

        let sections = collect_sections(&model, true);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].title, "Running header");
        assert_eq!(
            sections[1].content,
            [
                ContentItem::paragraph("page one"),
                ContentItem::paragraph("page two"),
            ]
        );
    }

    #[test]
    fn test_without_dedup_repeated_headers_open_new_sections() {
        let model = model_with(
            vec![
                TextElement::section_header("Running header"),
                TextElement::section_header("Running header"),
            ],
            vec![],
        );

        let sections = collect_sections(&model, false);
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn test_unknown_elements_skipped() {
        let model = model_with(vec![TextElement::Unknown, TextElement::text("kept")], vec![]);
        let sections = collect_sections(&model, false);
        assert_eq!(sections[0].content, [ContentItem::paragraph("kept")]);
    }
}
