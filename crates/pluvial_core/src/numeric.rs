//! Free-form numeric text handling.
//!
//! Field values come straight from the user and may use either `.` or `,` as
//! the decimal separator, carry units, or be garbage. Only the first comma is
//! treated as a decimal separator; thousands separators are not understood.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("not a valid number")]
    NonNumeric,
    #[error("value must be greater than zero")]
    NonPositive,
}

/// A finite, strictly positive magnitude parsed from user input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ValidatedMagnitude(f64);

impl ValidatedMagnitude {
    /// Returns `None` unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Replace the first comma with a period, then keep only ASCII digits,
/// periods and minus signs.
pub fn normalize(text: &str) -> String {
    text.trim()
        .replacen(',', ".", 1)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

pub fn is_valid_numeric(text: &str) -> bool {
    parse_normalized(text).is_some()
}

/// Parse `text` into a finite number of any sign.
pub fn parse_number(text: &str) -> Result<f64, NumericError> {
    parse_normalized(text).ok_or(NumericError::NonNumeric)
}

pub fn require_positive(value: f64) -> Result<ValidatedMagnitude, NumericError> {
    ValidatedMagnitude::new(value).ok_or(NumericError::NonPositive)
}

/// Parse `text` into a strictly positive magnitude.
pub fn parse_positive(text: &str) -> Result<ValidatedMagnitude, NumericError> {
    parse_number(text).and_then(require_positive)
}

fn parse_normalized(text: &str) -> Option<f64> {
    let cleaned = normalize(text);
    if matches!(cleaned.as_str(), "" | "." | "-" | "-.") {
        return None;
    }
    // Leftovers like "1.2.3" or "5-3" do not form a single number.
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
