//! Offline converter from the Food_Production research CSV to the
//! ingredients.json catalog served at runtime.
//!
//! Keeps a fixed set of 16 foods, fills missing land/freshwater/scarcity
//! values with the median over the kept rows, and derives slug, category,
//! and default portion for each.

use std::fs;

use clap::Parser;

use climate_plate::error::{PlateError, Result};
use climate_plate::models::{Category, Ingredient};
use climate_plate::scoring::round_to;

const FOODS_TO_KEEP: [(&str, u32); 16] = [
    ("Wheat & Rye (Bread)", 100),
    ("Barley (Beer)", 250),
    ("Rice", 100),
    ("Potatoes", 100),
    ("Peas", 100),
    ("Bananas", 100),
    ("Apples", 100),
    ("Wine", 250),
    ("Coffee", 250),
    ("Lamb & Mutton", 150),
    ("Pig Meat", 150),
    ("Poultry Meat", 150),
    ("Cheese", 100),
    ("Eggs", 100),
    ("Fish (farmed)", 150),
    ("Beef (beef herd)", 150),
];

const NAME_COLUMN: &str = "Food product";
const CO2_COLUMN: &str = "Total_emissions";
const LAND_COLUMN: &str = "Land use per kilogram (m² per kilogram)";
const FRESHWATER_COLUMN: &str = "Freshwater withdrawals per kilogram (liters per kilogram)";
const SCARCITY_COLUMN: &str = "Scarcity-weighted water use per kilogram (liters per kilogram)";

/// Generate the ingredient catalog from the food production dataset.
#[derive(Parser, Debug)]
#[command(name = "catalog-gen")]
struct Args {
    /// Input CSV file.
    #[arg(short, long, default_value = "data/Food_Production.csv")]
    input: String,

    /// Output JSON file.
    #[arg(short, long, default_value = "data/ingredients.json")]
    output: String,
}

/// One kept CSV row before median fill.
struct RawFood {
    name: String,
    co2: f64,
    land: Option<f64>,
    freshwater: Option<f64>,
    scarcity: Option<f64>,
    default_portion_g: u32,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut reader = csv::Reader::from_path(&args.input)?;
    let headers = reader.headers()?.clone();

    let name_idx = column_index(&headers, NAME_COLUMN)?;
    let co2_idx = column_index(&headers, CO2_COLUMN)?;
    let land_idx = column_index(&headers, LAND_COLUMN)?;
    let freshwater_idx = column_index(&headers, FRESHWATER_COLUMN)?;
    let scarcity_idx = column_index(&headers, SCARCITY_COLUMN)?;

    let mut raw: Vec<RawFood> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or("").to_string();
        let Some(&(_, portion)) = FOODS_TO_KEEP.iter().find(|(n, _)| *n == name) else {
            continue;
        };

        raw.push(RawFood {
            name,
            co2: parse_float(&record, co2_idx).unwrap_or(0.0),
            land: parse_float(&record, land_idx),
            freshwater: parse_float(&record, freshwater_idx),
            scarcity: parse_float(&record, scarcity_idx),
            default_portion_g: portion,
        });
    }

    let land_median = median(raw.iter().filter_map(|f| f.land));
    let freshwater_median = median(raw.iter().filter_map(|f| f.freshwater));
    let scarcity_median = median(raw.iter().filter_map(|f| f.scarcity));

    println!("Medians used for missing values:");
    println!("  land: {:.2}", land_median);
    println!("  freshwater: {:.2}", freshwater_median);
    println!("  scarcity water: {:.2}", scarcity_median);

    let ingredients: Vec<Ingredient> = raw
        .iter()
        .enumerate()
        .map(|(i, food)| Ingredient {
            id: (i + 1) as u32,
            slug: slugify(&food.name),
            name: food.name.clone(),
            category: categorize(&food.name),
            co2_kg_per_kg: round_to(food.co2, 1),
            land_m2_per_kg: Some(round_to(food.land.unwrap_or(land_median), 2)),
            freshwater_l_per_kg: Some(round_to(
                food.freshwater.unwrap_or(freshwater_median),
                1,
            )),
            scarcity_water_l_per_kg: Some(round_to(
                food.scarcity.unwrap_or(scarcity_median),
                1,
            )),
            default_portion_g: food.default_portion_g,
        })
        .collect();

    println!("Writing {} items -> {}", ingredients.len(), args.output);
    fs::write(&args.output, serde_json::to_string_pretty(&ingredients)?)?;
    println!("Done.");

    Ok(())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PlateError::InvalidInput(format!("missing CSV column: {name}")))
}

fn parse_float(record: &csv::StringRecord, idx: usize) -> Option<f64> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .replace('&', "and")
        .replace(['(', ')', ','], "")
        .replace('/', " ")
        .trim()
        .replace("  ", " ")
        .replace(' ', "_")
}

fn categorize(name: &str) -> Category {
    if ["Beef", "Lamb", "Pig", "Poultry", "Fish"]
        .iter()
        .any(|meat| name.contains(meat))
    {
        Category::Meat
    } else if matches!(name, "Coffee" | "Wine" | "Barley (Beer)") {
        Category::Drink
    } else if matches!(name, "Apples" | "Bananas") {
        Category::Fruit
    } else {
        Category::Plant
    }
}
