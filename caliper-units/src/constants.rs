//! Conversion constants
//!
//! The only process-lifetime state in the workspace: a fixed table of
//! factors and offsets. Both directions of a pair use the same constant
//! where the table defines one (multiplication out, division back), which
//! keeps round-trips exact well inside 1e-9. Pairs where the table fixes
//! a separate constant per direction (km/mi, g/oz) use each as given.

/// F = C * 9/5 + 32
pub const CELSIUS_TO_FAHRENHEIT_FACTOR: f64 = 9.0 / 5.0;
pub const CELSIUS_TO_FAHRENHEIT_OFFSET: f64 = 32.0;

/// K = C + 273.15
pub const CELSIUS_TO_KELVIN_OFFSET: f64 = 273.15;

pub const METERS_TO_FEET: f64 = 3.28084;
pub const METERS_TO_INCHES: f64 = 39.3701;
pub const KILOMETERS_TO_MILES: f64 = 0.621371;
pub const MILES_TO_KILOMETERS: f64 = 1.60934;

pub const KILOGRAMS_TO_POUNDS: f64 = 2.20462;
pub const GRAMS_TO_OUNCES: f64 = 0.035274;
pub const OUNCES_TO_GRAMS: f64 = 28.3495;

/// Decimal places applied at every conversion output.
pub const OUTPUT_DECIMALS: u32 = 2;
