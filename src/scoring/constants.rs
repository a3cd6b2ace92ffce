/// Reference bounds for min–max score normalization.
///
/// "Best" is an empirically chosen low-impact plate, "worst" a high-impact
/// one. Totals outside the range are clamped, not extrapolated.
pub const CO2_BEST_KG: f64 = 0.26;
pub const CO2_WORST_KG: f64 = 15.76;

pub const FRESHWATER_BEST_L: f64 = 184.6;
pub const FRESHWATER_WORST_L: f64 = 1926.1;

pub const LAND_BEST_M2: f64 = 0.42;
pub const LAND_WORST_M2: f64 = 71.18;

/// Metric weights for the combined score. Must sum to 1.
pub const CO2_WEIGHT: f64 = 0.6;
pub const FRESHWATER_WEIGHT: f64 = 0.3;
pub const LAND_WEIGHT: f64 = 0.1;

/// Score scale endpoints. Low = good, high = bad.
pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 10.0;

/// Display rounding, in decimal places.
pub const CO2_DECIMALS: i32 = 4;
pub const FRESHWATER_DECIMALS: i32 = 1;
pub const LAND_DECIMALS: i32 = 2;
pub const SCORE_DECIMALS: i32 = 1;

/// Round to a fixed number of decimal places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
