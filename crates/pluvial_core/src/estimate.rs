//! Annual harvest estimate.
//!
//! One millimetre of rain over one square metre is one litre, so
//! `area_m2 * rainfall_mm * coefficient` is already a volume in litres.

use serde::Serialize;

use crate::{Coefficient, ValidatedMagnitude};

/// Reference storage tank capacity, litres.
pub const TANK_CAPACITY_LITERS: f64 = 1100.0;
/// Water used by one washing-machine cycle, litres.
pub const WASH_LOAD_LITERS: f64 = 60.0;
/// Water used by one toilet flush, litres.
pub const TOILET_FLUSH_LITERS: f64 = 6.0;

/// Unrounded estimate; rounding happens at presentation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimationResult {
    pub liters_per_year: f64,
    pub tank_fills: f64,
    pub wash_loads: f64,
    pub toilet_flushes: f64,
}

pub fn estimate(
    surface_area: ValidatedMagnitude,
    rainfall_mm: ValidatedMagnitude,
    coefficient: Coefficient,
) -> EstimationResult {
    let liters_per_year = surface_area.get() * rainfall_mm.get() * coefficient.get();
    EstimationResult {
        liters_per_year,
        tank_fills: liters_per_year / TANK_CAPACITY_LITERS,
        wash_loads: liters_per_year / WASH_LOAD_LITERS,
        toilet_flushes: liters_per_year / TOILET_FLUSH_LITERS,
    }
}
