//! The simplification pipeline.
//!
//! Converts the flat element stream of a [`DocumentModel`] into a nested
//! section tree: elements are classified into content items, grouped into
//! sections, leveled by a title heuristic, assembled into a two-level
//! hierarchy, and finally split tables are merged back together.
//!
//! [`DocumentModel`]: crate::model::DocumentModel

mod classify;
mod document;
mod hierarchy;
mod sections;
mod tables;

pub use classify::classify;
pub use document::{ContentItem, Section, SimplifiedDocument};
pub use hierarchy::{assemble_hierarchy, infer_level, MAIN_HEADER_PREFIXES};
pub use sections::collect_sections;
pub use tables::merge_continuation_tables;
