//! Loading-rule constants shared by containers and vessels.

/// Kilograms in one (metric) ton. Vessel weight limits are stated in tons.
pub const KG_PER_TON: f64 = 1000.0;

/// Fraction of capacity a liquid container may be filled to when it carries
/// dangerous goods.
pub const DANGEROUS_LIQUID_FILL_RATIO: f64 = 0.5;

/// Fraction of capacity a liquid container may be filled to otherwise.
pub const STANDARD_LIQUID_FILL_RATIO: f64 = 0.9;

/// Fraction of the load a gas container retains after unloading.
pub const GAS_RESIDUAL_RATIO: f64 = 0.05;

/// Leading segment of every container serial number.
pub const SERIAL_PREFIX: &str = "KON";
