mod impact;
mod ingredient;
mod plate;

pub use impact::{ImpactSummary, IngredientImpact};
pub use ingredient::{Category, Ingredient};
pub use plate::{Plate, PlateItem};
