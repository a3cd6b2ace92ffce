pub mod catalog;
pub mod cli;
pub mod error;
pub mod explain;
pub mod http;
pub mod models;
pub mod scoring;
pub mod store;

pub use catalog::IngredientCatalog;
pub use error::{PlateError, Result};
pub use models::{ImpactSummary, Ingredient, Plate, PlateItem};
pub use store::PlateStore;
