use std::fmt;

use thiserror::Error;

use crate::NumericError;

/// Form field a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SurfaceArea,
    Rainfall,
    Coefficient,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::SurfaceArea => write!(f, "surface area"),
            Field::Rainfall => write!(f, "annual rainfall"),
            Field::Coefficient => write!(f, "runoff coefficient"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    NonNumeric,
    NonPositive,
    MissingCoefficient,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::NonNumeric => write!(f, "not a valid number"),
            ValidationErrorKind::NonPositive => write!(f, "must be greater than zero"),
            ValidationErrorKind::MissingCoefficient => write!(f, "no roof type selected"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    pub(crate) fn from_numeric(field: Field, err: NumericError) -> Self {
        let kind = match err {
            NumericError::NonNumeric => ValidationErrorKind::NonNumeric,
            NumericError::NonPositive => ValidationErrorKind::NonPositive,
        };
        Self::new(field, kind)
    }

    /// Message shown to the user under the form.
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            ValidationErrorKind::NonNumeric => "Please enter only valid numbers in all fields.",
            ValidationErrorKind::NonPositive => "Values must be greater than zero.",
            ValidationErrorKind::MissingCoefficient => "Please select a roof type.",
        }
    }
}
