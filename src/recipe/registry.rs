//! Recipe registration and lookup.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;

use super::{NoiseFilterStage, Recipe, StructuralStage, TitleCleanupStage};
use crate::error::{Error, Result};

type RecipeFactory = Box<dyn Fn() -> Recipe + Send + Sync>;

/// Name-to-recipe lookup table.
///
/// Names are explicit at registration; nothing is derived from type
/// identity. Factories run once per `get`, so every caller receives a
/// fresh recipe instance and no state crosses conversions.
pub struct RecipeRegistry {
    factories: HashMap<String, RecipeFactory>,
    order: Vec<String>,
}

impl RecipeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with the built-in recipes registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("default", || {
            Recipe::new(
                "default",
                "Hierarchical parsing with section title cleanup",
                StructuralStage::hierarchical(),
            )
            .with_stage(TitleCleanupStage)
        });

        registry.register("frc", || {
            Recipe::new(
                "frc",
                "Structural parsing tuned for Financial Reporting Council documents",
                StructuralStage::hierarchical(),
            )
        });

        registry.register("amnesty", || {
            Recipe::new(
                "amnesty",
                "Flat parsing with repeated-header dedup and boilerplate filtering",
                StructuralStage::flat_dedup(),
            )
            .with_stage(NoiseFilterStage::new())
        });

        registry
    }

    /// Register a recipe factory under an explicit name.
    ///
    /// Registering a name again replaces its factory; the listing position
    /// is kept from the first registration.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Recipe + Send + Sync + 'static,
    {
        let name = name.into();
        debug!("registering recipe {:?}", name);
        if self.factories.insert(name.clone(), Box::new(factory)).is_none() {
            self.order.push(name);
        }
    }

    /// Build a fresh instance of the named recipe.
    pub fn get(&self, name: &str) -> Result<Recipe> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| Error::UnknownRecipe(name.to_string()))
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Get all registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Get the number of registered recipes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for RecipeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Process-wide registry of built-in recipes.
///
/// Initialized on first use and read-only afterwards, so concurrent
/// lookups need no synchronization beyond the one-time init.
pub fn builtin_registry() -> &'static RecipeRegistry {
    static REGISTRY: OnceLock<RecipeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(RecipeRegistry::with_defaults)
}
