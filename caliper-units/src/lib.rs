//! Caliper Units - Unit Conversions
//!
//! Bidirectional conversions over a fixed constant table, rounded to two
//! decimals at the output boundary.
//!
//! Categories:
//! - Temperature (C, F, K) — Kelvin results and inputs are floored at
//!   absolute zero
//! - Length (m, ft, in, km, mi) — non-negative inputs only
//! - Weight (kg, lb, g, oz) — non-negative inputs only
//!
//! Every conversion exists as a named function
//! (`celsius_to_fahrenheit(100.0)`) and through the string-keyed
//! `convert(100.0, "C", "F")` dispatcher, which also accepts unit-name
//! aliases ("celsius", "meters", "lbs").

pub mod constants;
mod convert;
mod length;
mod temperature;
mod weight;

pub use convert::{convert, normalize_unit};
pub use length::{
    feet_to_meters, inches_to_meters, kilometers_to_miles, meters_to_feet, meters_to_inches,
    miles_to_kilometers,
};
pub use temperature::{
    celsius_to_fahrenheit, celsius_to_kelvin, fahrenheit_to_celsius, kelvin_to_celsius,
};
pub use weight::{grams_to_ounces, kilograms_to_pounds, ounces_to_grams, pounds_to_kilograms};
