use assert_float_eq::assert_float_absolute_eq;

use climate_plate::catalog::IngredientCatalog;
use climate_plate::models::{Category, Ingredient, Plate};
use climate_plate::scoring::{
    CO2_WORST_KG, FRESHWATER_WORST_L, ImpactTotals, LAND_WORST_M2, calculate_impact, impact_score,
};

fn make_ingredient(id: u32, name: &str, co2: f64, water: Option<f64>, land: Option<f64>) -> Ingredient {
    Ingredient {
        id,
        slug: name.to_lowercase(),
        name: name.to_string(),
        category: Category::Plant,
        co2_kg_per_kg: co2,
        land_m2_per_kg: land,
        freshwater_l_per_kg: water,
        scarcity_water_l_per_kg: None,
        default_portion_g: 100,
    }
}

#[test]
fn test_reference_example_one_kilogram() {
    // 1 kg of an ingredient with co2 2.5 / water 100 / land 1.0 per kg
    // contributes exactly those amounts.
    let catalog = IngredientCatalog::new(vec![make_ingredient(
        1,
        "Reference",
        2.5,
        Some(100.0),
        Some(1.0),
    )]);
    let mut plate = Plate::new("session");
    plate.set_item(1, 1000);

    let summary = calculate_impact(&plate, &catalog);
    assert_float_absolute_eq!(summary.total_co2_kg, 2.5, 1e-9);
    assert_float_absolute_eq!(summary.total_freshwater_l, 100.0, 1e-9);
    assert_float_absolute_eq!(summary.total_land_m2, 1.0, 1e-9);
}

#[test]
fn test_empty_plate_is_best_score() {
    let catalog = IngredientCatalog::new(vec![]);
    let summary = calculate_impact(&Plate::new("session"), &catalog);

    assert_eq!(summary.total_co2_kg, 0.0);
    assert_eq!(summary.total_freshwater_l, 0.0);
    assert_eq!(summary.total_land_m2, 0.0);
    assert_float_absolute_eq!(summary.impact_score_1_to_10, 1.0, 1e-9);
    assert!(summary.items.is_empty());
}

#[test]
fn test_score_stays_in_scale() {
    let cases = [
        ImpactTotals::default(),
        ImpactTotals {
            co2_kg: CO2_WORST_KG * 1000.0,
            freshwater_l: FRESHWATER_WORST_L * 1000.0,
            land_m2: LAND_WORST_M2 * 1000.0,
        },
        ImpactTotals {
            co2_kg: -50.0,
            freshwater_l: -50.0,
            land_m2: -50.0,
        },
        ImpactTotals {
            co2_kg: 3.0,
            freshwater_l: 500.0,
            land_m2: 10.0,
        },
    ];

    for totals in cases {
        let score = impact_score(&totals);
        assert!((1.0..=10.0).contains(&score), "score {score} out of scale");
    }
}

#[test]
fn test_score_monotone_per_metric() {
    let base = ImpactTotals {
        co2_kg: 4.0,
        freshwater_l: 600.0,
        land_m2: 15.0,
    };
    let base_score = impact_score(&base);

    let more_co2 = ImpactTotals { co2_kg: 10.0, ..base };
    let more_water = ImpactTotals {
        freshwater_l: 1800.0,
        ..base
    };
    let more_land = ImpactTotals { land_m2: 60.0, ..base };

    assert!(impact_score(&more_co2) >= base_score);
    assert!(impact_score(&more_water) >= base_score);
    assert!(impact_score(&more_land) >= base_score);

    // CO2 carries the largest weight, so a full-range CO2 jump moves the
    // score more than a same-fraction land jump.
    assert!(impact_score(&more_co2) > base_score);
}

#[test]
fn test_heavier_plate_scores_worse() {
    let catalog = IngredientCatalog::new(vec![make_ingredient(
        1,
        "Beef",
        59.6,
        Some(1451.2),
        Some(326.21),
    )]);

    let mut small = Plate::new("s-small");
    small.set_item(1, 50);
    let mut large = Plate::new("s-large");
    large.set_item(1, 400);

    let small_score = calculate_impact(&small, &catalog).impact_score_1_to_10;
    let large_score = calculate_impact(&large, &catalog).impact_score_1_to_10;

    assert!(large_score > small_score);
}

#[test]
fn test_rounding_policy() {
    // 123 g at co2 1.2345 / water 33.33 / land 0.456 per kg.
    let catalog = IngredientCatalog::new(vec![make_ingredient(
        1,
        "Odd",
        1.2345,
        Some(33.33),
        Some(0.456),
    )]);
    let mut plate = Plate::new("session");
    plate.set_item(1, 123);

    let summary = calculate_impact(&plate, &catalog);
    // 0.123 * 1.2345 = 0.15184... -> 4 dp
    assert_float_absolute_eq!(summary.items[0].co2_kg, 0.1518, 1e-9);
    // 0.123 * 33.33 = 4.0995... -> 1 dp
    assert_float_absolute_eq!(summary.items[0].freshwater_l, 4.1, 1e-9);
    // 0.123 * 0.456 = 0.0560... -> 2 dp
    assert_float_absolute_eq!(summary.items[0].land_m2, 0.06, 1e-9);
}
