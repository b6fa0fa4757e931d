//! Conversion recipes: named, composable transformation pipelines.
//!
//! A recipe is one structural stage (the base parse that turns a document
//! model into the raw section tree) followed by an ordered list of post
//! stages that each take the full output of the stages before them and
//! refine it in place. Delegation is explicit composition; no stage ever
//! re-derives structure from the raw element stream.
//!
//! # Example
//!
//! ```
//! use simpledoc::model::{DocumentModel, TextElement};
//! use simpledoc::recipe::builtin_registry;
//!
//! fn main() -> simpledoc::Result<()> {
//!     let mut model = DocumentModel::new();
//!     model.push_text(TextElement::section_header("IAS 36"));
//!     model.push_text(TextElement::list_item("1 Objective"));
//!
//!     let recipe = builtin_registry().get("default")?;
//!     let doc = recipe.simplify(&model);
//!     assert_eq!(doc.document[0].title, "IAS 36");
//!     Ok(())
//! }
//! ```

mod registry;
mod stages;

pub use registry::{builtin_registry, RecipeRegistry};
pub use stages::{NoiseFilterStage, PostStage, StructuralStage, TitleCleanupStage};

use log::debug;

use crate::model::DocumentModel;
use crate::simplify::SimplifiedDocument;

/// A named conversion pipeline.
///
/// Recipes hold no per-call mutable state, so one instance may serve any
/// number of sequential conversions; concurrent callers should obtain a
/// fresh instance each from the registry.
pub struct Recipe {
    name: String,
    description: String,
    structural: StructuralStage,
    post: Vec<Box<dyn PostStage>>,
}

impl std::fmt::Debug for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recipe")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("structural", &self.structural)
            .field(
                "post",
                &self.post.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Recipe {
    /// Create a recipe with a structural stage and no post stages.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        structural: StructuralStage,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            structural,
            post: Vec::new(),
        }
    }

    /// Append a post stage and return self.
    pub fn with_stage(mut self, stage: impl PostStage + 'static) -> Self {
        self.post.push(Box::new(stage));
        self
    }

    /// Get the recipe name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the full chain over one document model.
    pub fn simplify(&self, model: &DocumentModel) -> SimplifiedDocument {
        let mut doc = self.structural.parse(model);
        for stage in &self.post {
            debug!("recipe {:?}: applying stage {}", self.name, stage.name());
            stage.apply(&mut doc);
        }
        doc
    }
}
