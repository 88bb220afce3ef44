//! Display rounding shared by the result panel and the share text.

use crate::EstimationResult;

/// Shown in place of a total too large for `f64`.
pub const INFINITE_FIGURE: &str = "∞";

/// Whole litres with `,` thousands separators, e.g. `64,000`.
pub fn format_liters(liters: f64) -> String {
    if !liters.is_finite() {
        return INFINITE_FIGURE.to_string();
    }
    group_thousands(&format!("{:.0}", liters.round()))
}

pub fn format_one_decimal(value: f64) -> String {
    to_fixed(value, 1)
}

pub fn format_whole(value: f64) -> String {
    to_fixed(value, 0)
}

/// Rounds the stored binary value, not its shortest decimal form, so
/// `0.15` (really `0.1499…`) gives `0.1`. Exact ties round up.
fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return INFINITE_FIGURE.to_string();
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    let exact = value.mul_add(scale, -scaled) == 0.0;
    if exact && scaled.fract() == 0.5 {
        return format!("{:.*}", decimals, scaled.ceil() / scale);
    }
    format!("{:.*}", decimals, value)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Rounded figures ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRows {
    pub liters_per_year: String,
    pub tank_fills: String,
    pub wash_loads: String,
    pub toilet_flushes: String,
}

impl ResultRows {
    pub fn from_result(result: &EstimationResult) -> Self {
        Self {
            liters_per_year: format_liters(result.liters_per_year),
            tank_fills: format_one_decimal(result.tank_fills),
            wash_loads: format_one_decimal(result.wash_loads),
            toilet_flushes: format_whole(result.toilet_flushes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liters_are_grouped() {
        assert_eq!(format_liters(0.4), "0");
        assert_eq!(format_liters(999.5), "1,000");
        assert_eq!(format_liters(64000.0), "64,000");
        assert_eq!(format_liters(1234567.49), "1,234,567");
        assert_eq!(format_liters(8e19), "80,000,000,000,000,000,000");
    }

    #[test]
    fn decimals_round_the_stored_value() {
        assert_eq!(format_one_decimal(58.18181), "58.2");
        assert_eq!(format_one_decimal(9.0 / 60.0), "0.1");
        assert_eq!(format_one_decimal(0.35), "0.3");
        assert_eq!(format_one_decimal(12.0), "12.0");
        assert_eq!(format_whole(10666.67), "10667");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(format_one_decimal(0.25), "0.3");
        assert_eq!(format_one_decimal(0.75), "0.8");
        assert_eq!(format_whole(1.5), "2");
        assert_eq!(format_whole(2.5), "3");
    }

    #[test]
    fn non_finite_values_render_as_infinity() {
        assert_eq!(format_liters(f64::INFINITY), "∞");
        assert_eq!(format_one_decimal(f64::INFINITY), "∞");
        assert_eq!(format_whole(f64::INFINITY), "∞");
    }
}
