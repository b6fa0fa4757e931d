//! Source document model produced by the external structure extractor.
//!
//! This module is a read-only view over the extractor's output: an ordered
//! stream of typed text elements plus a separate, unordered collection of
//! tables. The pipeline consumes this model; it never builds or mutates it.

mod document;
mod element;
mod table;

pub use document::DocumentModel;
pub use element::TextElement;
pub use table::SourceTable;
