use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Ingredient;

/// Read-only ingredient reference set, loaded once at startup.
pub struct IngredientCatalog {
    /// Ingredients keyed by id; BTreeMap keeps listing order stable.
    ingredients: BTreeMap<u32, Ingredient>,
}

impl IngredientCatalog {
    /// Build a catalog from a list of ingredients.
    ///
    /// Deduplicates by id (last occurrence wins).
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        let mut map = BTreeMap::new();
        for ingredient in ingredients {
            map.insert(ingredient.id, ingredient);
        }
        Self { ingredients: map }
    }

    /// Load a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let ingredients: Vec<Ingredient> = serde_json::from_str(&content)?;
        Ok(Self::new(ingredients))
    }

    /// Look up an ingredient by id.
    pub fn get(&self, id: u32) -> Option<&Ingredient> {
        self.ingredients.get(&id)
    }

    /// Check whether an id exists in the catalog.
    pub fn contains(&self, id: u32) -> bool {
        self.ingredients.contains_key(&id)
    }

    /// All ingredients, in id order.
    pub fn all(&self) -> Vec<&Ingredient> {
        self.ingredients.values().collect()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
