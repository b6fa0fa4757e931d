//! Integration tests for recipe registration and composition.

use simpledoc::error::{Error, Result};
use simpledoc::model::{DocumentModel, TextElement};
use simpledoc::recipe::{
    builtin_registry, PostStage, Recipe, RecipeRegistry, StructuralStage,
};
use simpledoc::simplify::SimplifiedDocument;

/// Stage that tags every section title, for composition-order checks.
struct SuffixStage(&'static str);

impl PostStage for SuffixStage {
    fn name(&self) -> &'static str {
        "suffix"
    }

    fn apply(&self, doc: &mut SimplifiedDocument) {
        doc.for_each_section_mut(|section| {
            section.title.push_str(self.0);
        });
    }
}

#[test]
fn test_builtin_names_in_registration_order() {
    let registry = builtin_registry();
    assert_eq!(registry.names(), ["default", "frc", "amnesty"]);
}

#[test]
fn test_every_builtin_has_a_description() {
    let registry = builtin_registry();
    for name in registry.names() {
        let recipe = registry.get(name).unwrap();
        assert!(!recipe.description().is_empty(), "no description for {name}");
    }
}

#[test]
fn test_unknown_recipe_error_names_the_key() {
    let err = builtin_registry().get("nonexistent").unwrap_err();
    assert_eq!(err.to_string(), "Unknown recipe: nonexistent");
    assert!(matches!(err, Error::UnknownRecipe(_)));
}

#[test]
fn test_custom_registry_with_custom_stage() -> Result<()> {
    let mut registry = RecipeRegistry::new();
    registry.register("tagged", || {
        Recipe::new("tagged", "Tags titles", StructuralStage::hierarchical())
            .with_stage(SuffixStage(" [x]"))
    });

    let mut model = DocumentModel::new();
    model.push_text(TextElement::section_header("IAS 36"));

    let doc = registry.get("tagged")?.simplify(&model);
    assert_eq!(doc.document[0].title, "IAS 36 [x]");
    Ok(())
}

#[test]
fn test_stages_compose_in_order() -> Result<()> {
    let mut registry = RecipeRegistry::new();
    registry.register("double", || {
        Recipe::new("double", "", StructuralStage::hierarchical())
            .with_stage(SuffixStage(" [a]"))
            .with_stage(SuffixStage(" [b]"))
    });

    let mut model = DocumentModel::new();
    model.push_text(TextElement::section_header("IAS 36"));

    let doc = registry.get("double")?.simplify(&model);
    assert_eq!(doc.document[0].title, "IAS 36 [a] [b]");
    Ok(())
}

#[test]
fn test_recipe_instances_are_independent() -> Result<()> {
    // Two instances of the same recipe, run over different models, must
    // not interfere.
    let registry = builtin_registry();
    let first = registry.get("default")?;
    let second = registry.get("default")?;

    let mut model_a = DocumentModel::new();
    model_a.push_text(TextElement::section_header("IAS 36"));
    let mut model_b = DocumentModel::new();
    model_b.push_text(TextElement::section_header("IFRS 9"));

    let doc_a = first.simplify(&model_a);
    let doc_b = second.simplify(&model_b);
    assert_eq!(doc_a.document[0].title, "IAS 36");
    assert_eq!(doc_b.document[0].title, "IFRS 9");
    Ok(())
}

#[test]
fn test_default_recipe_cleans_titles() -> Result<()> {
    let mut model = DocumentModel::new();
    model.push_text(TextElement::section_header("IAS 36$^{ }$   Impairment"));

    let doc = builtin_registry().get("default")?.simplify(&model);
    assert_eq!(doc.document[0].title, "IAS 36 Impairment");
    Ok(())
}

#[test]
fn test_frc_recipe_keeps_titles_raw() -> Result<()> {
    let mut model = DocumentModel::new();
    model.push_text(TextElement::section_header("IAS 36$^{ }$"));

    let doc = builtin_registry().get("frc")?.simplify(&model);
    assert_eq!(doc.document[0].title, "IAS 36$^{ }$");
    Ok(())
}

#[test]
fn test_amnesty_recipe_dedups_and_filters() -> Result<()> {
    let mut model = DocumentModel::new();
    model.push_text(TextElement::section_header("AFGHANISTAN 2023"));
    model.push_text(TextElement::text("Findings."));
    model.push_text(TextElement::text("17"));
    model.push_text(TextElement::section_header("AFGHANISTAN 2023"));
    model.push_text(TextElement::text("More findings."));
    model.push_text(TextElement::text("www.amnesty.org.uk/report"));

    let doc = builtin_registry().get("amnesty")?.simplify(&model);
    assert_eq!(doc.section_count(), 1);

    let section = &doc.document[0];
    assert_eq!(section.title, "AFGHANISTAN 2023");
    assert_eq!(section.level, 1);
    assert!(section.subsections.is_none());
    assert_eq!(
        section.content,
        [
            simpledoc::ContentItem::paragraph("Findings."),
            simpledoc::ContentItem::paragraph("More findings."),
        ]
    );
    Ok(())
}
