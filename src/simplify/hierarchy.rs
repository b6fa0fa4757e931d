//! Section level inference and hierarchy assembly.

use super::document::Section;

/// Title prefixes that identify a top-level section.
pub const MAIN_HEADER_PREFIXES: &[&str] = &[
    "IAS ",
    "IFRS ",
    "FRS ",
    "UK exit",
    "Periodic Review",
    "Effective date",
];

fn is_main_header(title: &str) -> bool {
    MAIN_HEADER_PREFIXES
        .iter()
        .any(|prefix| title.starts_with(prefix))
}

/// Infer whether a title opens a top-level section or nests under the
/// previous one.
///
/// A title starting with a main-header prefix is level 1. An unprefixed
/// title directly following a prefixed one is level 2. Everything else
/// (the very first title, or consecutive unprefixed titles) defaults to
/// level 1. The heuristic only ever looks one title back, so a run of
/// three or more unprefixed titles becomes separate level-1 sections.
pub fn infer_level(title: &str, previous_title: Option<&str>) -> u32 {
    if is_main_header(title) {
        return 1;
    }
    if previous_title.map_or(false, is_main_header) {
        return 2;
    }
    1
}

/// Nest a flat, in-order section list into the two-level tree.
///
/// Level-1 sections become main sections with an empty subsection list and
/// are appended to the output. Level-2 sections attach to the most recent
/// main section; when none exists they are promoted to level 1 rather than
/// dropped. Encounter order is preserved throughout.
pub fn assemble_hierarchy(sections: Vec<Section>) -> Vec<Section> {
    let mut hierarchy: Vec<Section> = Vec::new();
    let mut previous_title: Option<String> = None;

    for mut section in sections {
        section.level = infer_level(&section.title, previous_title.as_deref());
        previous_title = Some(section.title.clone());

        if section.level == 1 {
            section.subsections = Some(Vec::new());
            hierarchy.push(section);
            continue;
        }

        match hierarchy.last_mut().and_then(|main| main.subsections.as_mut()) {
            Some(subsections) => subsections.push(section),
            None => {
                section.level = 1;
                hierarchy.push(section);
            }
        }
    }

    hierarchy
}
