use serde::{Deserialize, Serialize};

/// Broad food category used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meat,
    Plant,
    Fruit,
    Drink,
}

/// A catalog ingredient with per-kilogram environmental coefficients.
///
/// Land, freshwater, and scarcity-weighted water can be missing in the
/// source data; a missing coefficient contributes zero impact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub co2_kg_per_kg: f64,
    #[serde(default)]
    pub land_m2_per_kg: Option<f64>,
    #[serde(default)]
    pub freshwater_l_per_kg: Option<f64>,
    #[serde(default)]
    pub scarcity_water_l_per_kg: Option<f64>,
    pub default_portion_g: u32,
}

impl Ingredient {
    /// Land coefficient with the missing-value default applied.
    #[inline]
    pub fn land_coefficient(&self) -> f64 {
        self.land_m2_per_kg.unwrap_or(0.0)
    }

    /// Freshwater coefficient with the missing-value default applied.
    #[inline]
    pub fn freshwater_coefficient(&self) -> f64 {
        self.freshwater_l_per_kg.unwrap_or(0.0)
    }

    /// Basic validation: non-negative coefficients.
    pub fn is_valid(&self) -> bool {
        self.co2_kg_per_kg >= 0.0
            && self.land_m2_per_kg.is_none_or(|v| v >= 0.0)
            && self.freshwater_l_per_kg.is_none_or(|v| v >= 0.0)
    }
}
