//! Runoff coefficients for roof materials.

use serde::Serialize;

use crate::{Field, ValidationError, ValidationErrorKind};

/// Fraction of rainfall that a catchment surface actually delivers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Coefficient(f64);

impl Coefficient {
    /// Returns `None` unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofCoefficient {
    pub label: &'static str,
    pub value: f64,
}

const CATALOG: &[RoofCoefficient] = &[
    RoofCoefficient {
        label: "Metal sheet",
        value: 0.9,
    },
    RoofCoefficient {
        label: "Asphalt shingle",
        value: 0.85,
    },
    RoofCoefficient {
        label: "Clay or concrete tile",
        value: 0.8,
    },
    RoofCoefficient {
        label: "Concrete slab",
        value: 0.75,
    },
    RoofCoefficient {
        label: "Green roof",
        value: 0.3,
    },
];

impl RoofCoefficient {
    pub fn catalog() -> &'static [RoofCoefficient] {
        CATALOG
    }

    /// The value as it appears in a selection list.
    pub fn selection_value(&self) -> String {
        self.value.to_string()
    }
}

/// Resolve the raw value of the roof-type selection.
///
/// There is no fallback coefficient: anything that is not a positive number
/// is reported as a missing selection.
pub fn resolve_selection(raw: Option<&str>) -> Result<Coefficient, ValidationError> {
    let missing = ValidationError::new(Field::Coefficient, ValidationErrorKind::MissingCoefficient);
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(missing)?;
    raw.parse::<f64>()
        .ok()
        .and_then(Coefficient::new)
        .ok_or(missing)
}

/// Human label for a coefficient, naming the roof type when it is a catalog entry.
pub fn label_for(coefficient: Coefficient) -> String {
    match CATALOG.iter().find(|entry| entry.value == coefficient.get()) {
        Some(entry) => format!("{} ({})", coefficient.get(), entry.label),
        None => coefficient.get().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_values_are_valid_coefficients() {
        for entry in RoofCoefficient::catalog() {
            assert!(Coefficient::new(entry.value).is_some(), "{}", entry.label);
            let resolved = resolve_selection(Some(entry.selection_value().as_str())).unwrap();
            assert_eq!(resolved.get(), entry.value);
        }
    }

    #[test]
    fn missing_or_invalid_selection_has_no_default() {
        let cases = [
            None,
            Some(""),
            Some("  "),
            Some("0"),
            Some("-0.8"),
            Some("tile"),
            Some("NaN"),
            Some("inf"),
        ];
        for raw in cases {
            let err = resolve_selection(raw).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::MissingCoefficient);
            assert_eq!(err.field, Field::Coefficient);
        }
    }

    #[test]
    fn labels_name_catalog_entries() {
        assert_eq!(
            label_for(Coefficient::new(0.8).unwrap()),
            "0.8 (Clay or concrete tile)"
        );
        assert_eq!(label_for(Coefficient::new(0.55).unwrap()), "0.55");
    }
}
