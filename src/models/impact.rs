use serde::{Deserialize, Serialize};

/// Per-ingredient contribution to a plate's impact, recomputed on each query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientImpact {
    pub ingredient_id: u32,
    pub name: String,
    pub quantity_g: u32,
    pub co2_kg: f64,
    pub freshwater_l: f64,
    pub land_m2: f64,
}

/// Aggregate impact of a plate, including the normalized 1–10 score.
///
/// Low score = good: a plate at or below the "best" reference scores 1.0,
/// one at or above the "worst" reference scores 10.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub session_id: String,
    pub total_co2_kg: f64,
    pub total_freshwater_l: f64,
    pub total_land_m2: f64,
    pub impact_score_1_to_10: f64,
    pub items: Vec<IngredientImpact>,
}
