//! String-keyed conversion dispatch
//!
//! `convert(100.0, "km", "mi")` style entry point on top of the named
//! conversion functions. Symbols go through an alias table first, so
//! "meters", "metre" and "m" all name the same unit.

use std::collections::HashMap;
use std::sync::LazyLock;

use caliper_core::prelude::*;

use crate::{length, temperature, weight};

/// Alias table: lowercased spelling -> canonical symbol
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Temperature
    for alias in ["c", "celsius", "°c"] {
        m.insert(alias, "C");
    }
    for alias in ["f", "fahrenheit", "°f"] {
        m.insert(alias, "F");
    }
    for alias in ["k", "kelvin"] {
        m.insert(alias, "K");
    }

    // Length
    for alias in ["m", "meter", "meters", "metre", "metres"] {
        m.insert(alias, "m");
    }
    for alias in ["ft", "foot", "feet"] {
        m.insert(alias, "ft");
    }
    for alias in ["in", "inch", "inches"] {
        m.insert(alias, "in");
    }
    for alias in ["km", "kilometer", "kilometers", "kilometre", "kilometres"] {
        m.insert(alias, "km");
    }
    for alias in ["mi", "mile", "miles"] {
        m.insert(alias, "mi");
    }

    // Weight
    for alias in ["kg", "kilogram", "kilograms"] {
        m.insert(alias, "kg");
    }
    for alias in ["lb", "lbs", "pound", "pounds"] {
        m.insert(alias, "lb");
    }
    for alias in ["g", "gram", "grams"] {
        m.insert(alias, "g");
    }
    for alias in ["oz", "ounce", "ounces"] {
        m.insert(alias, "oz");
    }

    m
});

/// Resolve a unit spelling to its canonical symbol.
pub fn normalize_unit(symbol: &str) -> Result<&'static str, CaliperError> {
    let key = symbol.trim().to_lowercase();
    ALIASES
        .get(key.as_str())
        .copied()
        .ok_or_else(|| CaliperError::unknown_unit(symbol.trim()))
}

/// Identity conversion: still validated and rounded like any other output.
fn same_unit(value: f64, unit: &'static str) -> Result<f64, CaliperError> {
    let value = match unit {
        "K" => ensure_kelvin(value)?,
        "C" | "F" => ensure_finite(value, "temperature")?,
        _ => ensure_non_negative(value, "value")?,
    };
    Ok(round_to(value, crate::constants::OUTPUT_DECIMALS))
}

/// Convert `value` between two named units.
///
/// Unknown symbols fail with `UnknownUnit`; recognized symbols with no
/// conversion between them (different categories) fail with
/// `UnsupportedConversion`.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, CaliperError> {
    let from = normalize_unit(from)?;
    let to = normalize_unit(to)?;

    match (from, to) {
        ("C", "F") => temperature::celsius_to_fahrenheit(value),
        ("F", "C") => temperature::fahrenheit_to_celsius(value),
        ("C", "K") => temperature::celsius_to_kelvin(value),
        ("K", "C") => temperature::kelvin_to_celsius(value),

        ("m", "ft") => length::meters_to_feet(value),
        ("ft", "m") => length::feet_to_meters(value),
        ("m", "in") => length::meters_to_inches(value),
        ("in", "m") => length::inches_to_meters(value),
        ("km", "mi") => length::kilometers_to_miles(value),
        ("mi", "km") => length::miles_to_kilometers(value),

        ("kg", "lb") => weight::kilograms_to_pounds(value),
        ("lb", "kg") => weight::pounds_to_kilograms(value),
        ("g", "oz") => weight::grams_to_ounces(value),
        ("oz", "g") => weight::ounces_to_grams(value),

        (a, b) if a == b => same_unit(value, a),

        (a, b) => Err(CaliperError::unsupported_conversion(a, b)),
    }
}
