//! Length conversions: meters/feet/inches, kilometers/miles
//!
//! Lengths are magnitudes; negative inputs are rejected.

use caliper_core::prelude::*;

use crate::constants::{
    KILOMETERS_TO_MILES, METERS_TO_FEET, METERS_TO_INCHES, MILES_TO_KILOMETERS, OUTPUT_DECIMALS,
};

pub fn meters_to_feet(meters: f64) -> Result<f64, CaliperError> {
    let meters = ensure_non_negative(meters, "meters")?;
    Ok(round_to(meters * METERS_TO_FEET, OUTPUT_DECIMALS))
}

pub fn feet_to_meters(feet: f64) -> Result<f64, CaliperError> {
    let feet = ensure_non_negative(feet, "feet")?;
    Ok(round_to(feet / METERS_TO_FEET, OUTPUT_DECIMALS))
}

pub fn meters_to_inches(meters: f64) -> Result<f64, CaliperError> {
    let meters = ensure_non_negative(meters, "meters")?;
    Ok(round_to(meters * METERS_TO_INCHES, OUTPUT_DECIMALS))
}

pub fn inches_to_meters(inches: f64) -> Result<f64, CaliperError> {
    let inches = ensure_non_negative(inches, "inches")?;
    Ok(round_to(inches / METERS_TO_INCHES, OUTPUT_DECIMALS))
}

pub fn kilometers_to_miles(kilometers: f64) -> Result<f64, CaliperError> {
    let kilometers = ensure_non_negative(kilometers, "kilometers")?;
    Ok(round_to(kilometers * KILOMETERS_TO_MILES, OUTPUT_DECIMALS))
}

pub fn miles_to_kilometers(miles: f64) -> Result<f64, CaliperError> {
    let miles = ensure_non_negative(miles, "miles")?;
    Ok(round_to(miles * MILES_TO_KILOMETERS, OUTPUT_DECIMALS))
}
