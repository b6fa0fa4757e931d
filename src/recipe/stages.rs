//! Recipe stages: structural parsing and post-processing.

use log::debug;
use regex::Regex;

use crate::model::DocumentModel;
use crate::simplify::{
    assemble_hierarchy, collect_sections, merge_continuation_tables, ContentItem,
    SimplifiedDocument,
};

/// A post-processing stage in a recipe chain.
///
/// Each stage receives the full simplified document produced by the stages
/// before it and mutates it in place. Stages never read the raw element
/// stream.
pub trait PostStage: Send + Sync {
    /// Stage name used in trace logging.
    fn name(&self) -> &'static str;

    /// Transform the document in place.
    fn apply(&self, doc: &mut SimplifiedDocument);
}

/// The base parsing stage.
///
/// Runs section building, level inference with hierarchy assembly (or the
/// flat variant), and continuation-table merging, producing the raw
/// simplified document that post stages refine.
#[derive(Debug, Clone, Copy)]
pub struct StructuralStage {
    dedup_headers: bool,
    flat: bool,
}

impl StructuralStage {
    /// Standard variant: every header opens a section, levels are inferred
    /// and sections are nested into the two-level tree.
    pub fn hierarchical() -> Self {
        Self {
            dedup_headers: false,
            flat: false,
        }
    }

    /// Variant that skips repeated headers by exact text at
    /// section-creation time and emits a flat single-level list with no
    /// subsections. Table attachment and merging are unchanged.
    pub fn flat_dedup() -> Self {
        Self {
            dedup_headers: true,
            flat: true,
        }
    }

    /// Parse a document model into the raw simplified document.
    pub fn parse(&self, model: &DocumentModel) -> SimplifiedDocument {
        let sections = collect_sections(model, self.dedup_headers);

        let mut sections = if self.flat {
            sections
        } else {
            assemble_hierarchy(sections)
        };

        // The implicit default section only survives if it received
        // anything; an untouched one would serialize as an empty untitled
        // section at the head of every document.
        if sections.first().map_or(false, |s| s.title.is_empty() && s.is_empty()) {
            sections.remove(0);
        }

        let mut doc = SimplifiedDocument { document: sections };
        doc.for_each_section_mut(|section| {
            let items = std::mem::take(&mut section.content);
            section.content = merge_continuation_tables(items);
        });
        doc
    }
}

/// Strips typesetting artifacts from section and subsection titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleCleanupStage;

/// Empty-superscript marker the extractor leaves behind for math-mode
/// superscripts with no content.
const EMPTY_SUPERSCRIPT: &str = "$^{ }$";

impl TitleCleanupStage {
    /// Clean one title: drop the empty-superscript marker, drop remaining
    /// math-mode delimiters, and collapse whitespace runs to single
    /// spaces. Idempotent.
    pub fn clean_title(title: &str) -> String {
        let title = title.replace(EMPTY_SUPERSCRIPT, "");
        let title = title.replace('$', "");
        title.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl PostStage for TitleCleanupStage {
    fn name(&self) -> &'static str {
        "title-cleanup"
    }

    fn apply(&self, doc: &mut SimplifiedDocument) {
        doc.for_each_section_mut(|section| {
            let cleaned = Self::clean_title(&section.title);
            if cleaned != section.title {
                debug!("cleaned title {:?} -> {:?}", section.title, cleaned);
                section.title = cleaned;
            }
        });
    }
}

/// Organization prefix that identifies a running footer paragraph.
const FOOTER_PREFIX: &str = "Amnesty International";

/// Footers are short lines; anything at or past this many characters is
/// treated as real content.
const FOOTER_MAX_CHARS: usize = 100;

/// Drops publisher boilerplate from section content.
///
/// Three rules, applied with the same rule set to every section's and
/// subsection's content independently:
///
/// - page-number paragraphs: trimmed text is all digits;
/// - URL-only paragraphs: trimmed text is a bare URL and nothing else;
/// - a footer paragraph: starts with the organization prefix, is shorter
///   than the footer threshold, and is the last item still standing after
///   the first two rules ran.
pub struct NoiseFilterStage {
    url_pattern: Regex,
}

impl NoiseFilterStage {
    /// Create the filter, compiling its URL pattern once.
    pub fn new() -> Self {
        Self {
            // Optional scheme, optional www., dotted domain labels,
            // optional path; anchored so partial matches never fire.
            url_pattern: Regex::new(
                r"^(?:https?://)?(?:www\.)?[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+(?:/\S*)?$",
            )
            .unwrap(),
        }
    }

    fn is_page_number(text: &str) -> bool {
        let trimmed = text.trim();
        !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
    }

    fn is_bare_url(&self, text: &str) -> bool {
        self.url_pattern.is_match(text.trim())
    }

    fn is_footer(text: &str) -> bool {
        let trimmed = text.trim();
        trimmed.starts_with(FOOTER_PREFIX) && trimmed.chars().count() < FOOTER_MAX_CHARS
    }

    fn filter_content(&self, items: Vec<ContentItem>) -> Vec<ContentItem> {
        let mut kept: Vec<ContentItem> = items
            .into_iter()
            .filter(|item| match item {
                ContentItem::Paragraph { text, .. } => {
                    !Self::is_page_number(text) && !self.is_bare_url(text)
                }
                _ => true,
            })
            .collect();

        // The footer rule is position-dependent: it only fires on the last
        // surviving item, judged against the already-filtered list.
        if let Some(ContentItem::Paragraph { text, .. }) = kept.last() {
            if Self::is_footer(text) {
                kept.pop();
            }
        }

        kept
    }
}

impl Default for NoiseFilterStage {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStage for NoiseFilterStage {
    fn name(&self) -> &'static str {
        "noise-filter"
    }

    fn apply(&self, doc: &mut SimplifiedDocument) {
        doc.for_each_section_mut(|section| {
            let items = std::mem::take(&mut section.content);
            section.content = self.filter_content(items);
        });
    }
}
