use crate::catalog::IngredientCatalog;
use crate::models::{ImpactSummary, IngredientImpact, Plate};
use crate::scoring::constants::*;

/// Raw (unrounded) impact totals for a plate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpactTotals {
    pub co2_kg: f64,
    pub freshwater_l: f64,
    pub land_m2: f64,
}

/// Normalize a total against its reference bounds, clamped to [0, 1].
///
/// A collapsed range (best == worst) yields the neutral value 0.5.
pub fn normalize_metric(value: f64, best: f64, worst: f64) -> f64 {
    let range = worst - best;
    if range == 0.0 {
        return 0.5;
    }
    ((value - best) / range).clamp(0.0, 1.0)
}

/// Compute the 1–10 impact score from raw totals.
///
/// Weighted combination of the three normalized metrics (60% CO₂, 30%
/// freshwater, 10% land), mapped onto [1, 10] and rounded to one decimal.
/// Low = good: totals at or below every "best" bound score 1.0, at or above
/// every "worst" bound 10.0.
pub fn impact_score(totals: &ImpactTotals) -> f64 {
    let co2_norm = normalize_metric(totals.co2_kg, CO2_BEST_KG, CO2_WORST_KG);
    let water_norm = normalize_metric(totals.freshwater_l, FRESHWATER_BEST_L, FRESHWATER_WORST_L);
    let land_norm = normalize_metric(totals.land_m2, LAND_BEST_M2, LAND_WORST_M2);

    let combined = CO2_WEIGHT * co2_norm + FRESHWATER_WEIGHT * water_norm + LAND_WEIGHT * land_norm;

    let score = SCORE_MIN + combined * (SCORE_MAX - SCORE_MIN);
    round_to(score.clamp(SCORE_MIN, SCORE_MAX), SCORE_DECIMALS)
}

/// Transform a plate into its impact summary.
///
/// Items whose ingredient id no longer resolves against the catalog are
/// skipped: they contribute nothing and do not appear in the item list.
/// Totals accumulate unrounded; display rounding is applied to the summary
/// fields and the score is computed from the raw totals.
pub fn calculate_impact(plate: &Plate, catalog: &IngredientCatalog) -> ImpactSummary {
    let mut totals = ImpactTotals::default();
    let mut items = Vec::with_capacity(plate.items.len());

    for item in &plate.items {
        let Some(ingredient) = catalog.get(item.ingredient_id) else {
            continue;
        };

        let kg = f64::from(item.quantity_g) / 1000.0;
        let co2 = kg * ingredient.co2_kg_per_kg;
        let water = kg * ingredient.freshwater_coefficient();
        let land = kg * ingredient.land_coefficient();

        totals.co2_kg += co2;
        totals.freshwater_l += water;
        totals.land_m2 += land;

        items.push(IngredientImpact {
            ingredient_id: ingredient.id,
            name: ingredient.name.clone(),
            quantity_g: item.quantity_g,
            co2_kg: round_to(co2, CO2_DECIMALS),
            freshwater_l: round_to(water, FRESHWATER_DECIMALS),
            land_m2: round_to(land, LAND_DECIMALS),
        });
    }

    ImpactSummary {
        session_id: plate.session_id.clone(),
        total_co2_kg: round_to(totals.co2_kg, CO2_DECIMALS),
        total_freshwater_l: round_to(totals.freshwater_l, FRESHWATER_DECIMALS),
        total_land_m2: round_to(totals.land_m2, LAND_DECIMALS),
        impact_score_1_to_10: impact_score(&totals),
        items,
    }
}
