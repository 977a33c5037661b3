//! Temperature conversions: Celsius, Fahrenheit, Kelvin

use caliper_core::prelude::*;

use crate::constants::{
    CELSIUS_TO_FAHRENHEIT_FACTOR, CELSIUS_TO_FAHRENHEIT_OFFSET, CELSIUS_TO_KELVIN_OFFSET,
    OUTPUT_DECIMALS,
};

/// F = C * 9/5 + 32
pub fn celsius_to_fahrenheit(celsius: f64) -> Result<f64, CaliperError> {
    let celsius = ensure_finite(celsius, "celsius")?;
    let fahrenheit = celsius * CELSIUS_TO_FAHRENHEIT_FACTOR + CELSIUS_TO_FAHRENHEIT_OFFSET;
    Ok(round_to(fahrenheit, OUTPUT_DECIMALS))
}

/// C = (F - 32) * 5/9
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64, CaliperError> {
    let fahrenheit = ensure_finite(fahrenheit, "fahrenheit")?;
    let celsius = (fahrenheit - CELSIUS_TO_FAHRENHEIT_OFFSET) / CELSIUS_TO_FAHRENHEIT_FACTOR;
    Ok(round_to(celsius, OUTPUT_DECIMALS))
}

/// K = C + 273.15. Results below absolute zero are rejected.
pub fn celsius_to_kelvin(celsius: f64) -> Result<f64, CaliperError> {
    let celsius = ensure_finite(celsius, "celsius")?;
    let kelvin = celsius + CELSIUS_TO_KELVIN_OFFSET;
    if kelvin < 0.0 {
        return Err(CaliperError::BelowAbsoluteZero { kelvin });
    }
    Ok(round_to(kelvin, OUTPUT_DECIMALS))
}

/// C = K - 273.15. The input itself must not be below absolute zero.
pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64, CaliperError> {
    let kelvin = ensure_kelvin(kelvin)?;
    let celsius = kelvin - CELSIUS_TO_KELVIN_OFFSET;
    Ok(round_to(celsius, OUTPUT_DECIMALS))
}
