//! Weight conversions: kilograms/pounds, grams/ounces
//!
//! Weights are magnitudes; negative inputs are rejected.

use caliper_core::prelude::*;

use crate::constants::{GRAMS_TO_OUNCES, KILOGRAMS_TO_POUNDS, OUNCES_TO_GRAMS, OUTPUT_DECIMALS};

pub fn kilograms_to_pounds(kilograms: f64) -> Result<f64, CaliperError> {
    let kilograms = ensure_non_negative(kilograms, "kilograms")?;
    Ok(round_to(kilograms * KILOGRAMS_TO_POUNDS, OUTPUT_DECIMALS))
}

pub fn pounds_to_kilograms(pounds: f64) -> Result<f64, CaliperError> {
    let pounds = ensure_non_negative(pounds, "pounds")?;
    Ok(round_to(pounds / KILOGRAMS_TO_POUNDS, OUTPUT_DECIMALS))
}

pub fn grams_to_ounces(grams: f64) -> Result<f64, CaliperError> {
    let grams = ensure_non_negative(grams, "grams")?;
    Ok(round_to(grams * GRAMS_TO_OUNCES, OUTPUT_DECIMALS))
}

pub fn ounces_to_grams(ounces: f64) -> Result<f64, CaliperError> {
    let ounces = ensure_non_negative(ounces, "ounces")?;
    Ok(round_to(ounces * OUNCES_TO_GRAMS, OUTPUT_DECIMALS))
}
