use pluvial_logging::{pluvial_debug, pluvial_info};

use crate::coefficient::{label_for, resolve_selection};
use crate::numeric::{parse_number, require_positive, ValidatedMagnitude};
use crate::share::{build_share_text, ShareInputs, ShareText};
use crate::{estimate, Coefficient, EstimationResult, Field, ValidationError};

/// A successful calculation: the raw estimate and its share payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub inputs: ShareInputs,
    pub result: EstimationResult,
    pub share_text: ShareText,
}

/// Validate the three form values and compute the estimate.
///
/// Validation runs in two passes. The first checks that both fields hold a
/// number and that a roof type is selected; the second checks that both
/// numbers are positive. Within a pass fields are checked in form order
/// (surface, rainfall, coefficient) and the first failure is returned.
pub fn calculate(
    raw_surface: &str,
    raw_rainfall: &str,
    coefficient_selection: Option<&str>,
) -> Result<Calculation, ValidationError> {
    let checked = check_inputs(raw_surface, raw_rainfall, coefficient_selection);

    let (surface, rainfall, coefficient) = match checked {
        Ok(values) => values,
        Err(err) => {
            pluvial_debug!("Rejected calculation input: {}", err);
            return Err(err);
        }
    };

    let result = estimate(surface, rainfall, coefficient);
    let inputs = ShareInputs {
        surface_area: surface.get().to_string(),
        rainfall_mm: rainfall.get().to_string(),
        coefficient_label: label_for(coefficient),
    };
    let share_text = build_share_text(&inputs, &result);
    pluvial_info!(
        "Estimated {:.1} L/year (surface={} rainfall={} coefficient={})",
        result.liters_per_year,
        surface.get(),
        rainfall.get(),
        coefficient.get()
    );

    Ok(Calculation {
        inputs,
        result,
        share_text,
    })
}

fn check_inputs(
    raw_surface: &str,
    raw_rainfall: &str,
    coefficient_selection: Option<&str>,
) -> Result<(ValidatedMagnitude, ValidatedMagnitude, Coefficient), ValidationError> {
    let surface = parse_number(raw_surface)
        .map_err(|err| ValidationError::from_numeric(Field::SurfaceArea, err))?;
    let rainfall = parse_number(raw_rainfall)
        .map_err(|err| ValidationError::from_numeric(Field::Rainfall, err))?;
    let coefficient = resolve_selection(coefficient_selection)?;

    let surface = require_positive(surface)
        .map_err(|err| ValidationError::from_numeric(Field::SurfaceArea, err))?;
    let rainfall = require_positive(rainfall)
        .map_err(|err| ValidationError::from_numeric(Field::Rainfall, err))?;
    Ok((surface, rainfall, coefficient))
}
