//! BMI computation engine.
//!
//! Pure functions only: parsing user-entered measurements, converting
//! imperial height to meters, computing BMI, and classifying the result
//! against the fixed threshold table.

use crate::{BmiReading, Classification, Error, Result};

/// Conversion factor from inches to meters
pub const METERS_PER_INCH: f64 = 0.0254;

/// Ordered (exclusive upper bound, label) pairs, evaluated first-match.
///
/// Anything at or above the last bound is Obese Class III.
const CLASSIFICATION_TABLE: [(f64, Classification); 7] = [
    (16.0, Classification::SevereThinness),
    (17.0, Classification::ModerateThinness),
    (18.5, Classification::MildThinness),
    (25.0, Classification::Normal),
    (30.0, Classification::Overweight),
    (35.0, Classification::ObeseClassI),
    (40.0, Classification::ObeseClassII),
];

/// Classify a BMI value against the threshold table
pub fn classify(bmi: f64) -> Classification {
    for (upper, label) in CLASSIFICATION_TABLE {
        if bmi < upper {
            return label;
        }
    }
    Classification::ObeseClassIII
}

/// Parse a user-entered measurement field into a finite number
///
/// `field` names the input for the error message ("weight", "height (ft)", ...).
pub fn parse_measurement(field: &'static str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| Error::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(Error::InvalidNumber {
            field,
            value: raw.to_string(),
        });
    }

    Ok(value)
}

/// Convert an imperial height to meters
pub fn height_to_meters(feet: f64, inches: f64) -> f64 {
    (feet * 12.0 + inches) * METERS_PER_INCH
}

/// Compute BMI and its classification from weight and imperial height
///
/// All inputs must be finite and weight must be positive; the derived
/// height must be greater than zero (a zero height is an input error,
/// never a silent infinity). No side effects; safe to call repeatedly.
pub fn compute(weight_kg: f64, height_ft: f64, height_in: f64) -> Result<BmiReading> {
    for (field, value) in [
        ("weight", weight_kg),
        ("height (ft)", height_ft),
        ("height (in)", height_in),
    ] {
        if !value.is_finite() {
            return Err(Error::InvalidNumber {
                field,
                value: value.to_string(),
            });
        }
    }

    if weight_kg <= 0.0 {
        return Err(Error::InvalidNumber {
            field: "weight",
            value: weight_kg.to_string(),
        });
    }

    let height_m = height_to_meters(height_ft, height_in);
    if height_m <= 0.0 {
        return Err(Error::InvalidHeight);
    }

    let bmi = weight_kg / (height_m * height_m);
    tracing::debug!("Computed BMI {:.2} from {} kg / {:.4} m", bmi, weight_kg, height_m);

    Ok(BmiReading {
        bmi,
        classification: classify(bmi),
    })
}
