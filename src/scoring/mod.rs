pub mod calculations;
pub mod constants;

pub use calculations::{ImpactTotals, calculate_impact, impact_score, normalize_metric};
pub use constants::*;
