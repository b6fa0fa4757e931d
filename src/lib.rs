//! # simpledoc
//!
//! Reshapes a parsed document model, the output of an external
//! PDF-structure extractor, into a simplified, hierarchical JSON
//! representation suitable for viewers, indexers, and LLM ingestion.
//!
//! The heart of the library is a chain of conversion recipes: a structural
//! base parse that groups the flat element stream into a two-level section
//! tree (inferring section levels and merging split tables along the way),
//! with publisher-specific cleanup and filtering stages layered on top.
//!
//! ## Quick Start
//!
//! ```
//! use simpledoc::model::{DocumentModel, TextElement};
//! use simpledoc::{simplify_to_json, JsonFormat};
//!
//! fn main() -> simpledoc::Result<()> {
//!     let mut model = DocumentModel::new();
//!     model.push_text(TextElement::section_header("IAS 36"));
//!     model.push_text(TextElement::list_item("1 Objective"));
//!
//!     let json = simplify_to_json(&model, "default", JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Recipes
//!
//! - `default`: hierarchical parsing with section title cleanup
//! - `frc`: plain structural parsing for Financial Reporting Council
//!   documents
//! - `amnesty`: flat parsing with repeated-header dedup and boilerplate
//!   filtering
//!
//! Each conversion is a pure function of (document model, recipe name):
//! the core is synchronous, holds no shared mutable state, and is safe to
//! call concurrently as long as each call uses its own model and recipe
//! instance.

pub mod error;
pub mod model;
pub mod recipe;
pub mod render;
pub mod simplify;

pub use error::{Error, Result};
pub use model::{DocumentModel, SourceTable, TextElement};
pub use recipe::{builtin_registry, Recipe, RecipeRegistry};
pub use render::{to_json, JsonFormat};
pub use simplify::{ContentItem, Section, SimplifiedDocument};

use std::io::Read;
use std::path::Path;

/// Simplify a document model with a built-in recipe.
///
/// # Errors
///
/// Fails with [`Error::UnknownRecipe`] when `recipe` is not registered.
///
/// # Example
///
/// ```
/// use simpledoc::{simplify, DocumentModel, TextElement};
///
/// let mut model = DocumentModel::new();
/// model.push_text(TextElement::section_header("IFRS 9"));
///
/// let doc = simplify(&model, "default").unwrap();
/// assert_eq!(doc.document[0].title, "IFRS 9");
/// ```
pub fn simplify(model: &DocumentModel, recipe: &str) -> Result<SimplifiedDocument> {
    let recipe = builtin_registry().get(recipe)?;
    Ok(recipe.simplify(model))
}

/// Read a document-model JSON file and simplify it.
///
/// # Example
///
/// ```no_run
/// use simpledoc::simplify_file;
///
/// let doc = simplify_file("model.json", "default").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn simplify_file<P: AsRef<Path>>(path: P, recipe: &str) -> Result<SimplifiedDocument> {
    let model = DocumentModel::from_file(path)?;
    simplify(&model, recipe)
}

/// Read a document model from a reader and simplify it.
pub fn simplify_reader<R: Read>(reader: R, recipe: &str) -> Result<SimplifiedDocument> {
    let model = DocumentModel::from_reader(reader)?;
    simplify(&model, recipe)
}

/// Simplify a document model and serialize the result in one step.
pub fn simplify_to_json(
    model: &DocumentModel,
    recipe: &str,
    format: JsonFormat,
) -> Result<String> {
    let doc = simplify(model, recipe)?;
    to_json(&doc, format)
}
