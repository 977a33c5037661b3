//! Caliper - small measurement and text utilities
//!
//! A façade over the workspace crates:
//! - `caliper-math`: add, subtract, multiply, divide, power, sqrt, log
//! - `caliper-units`: temperature, length and weight conversions
//! - `caliper-text`: reverse, vowel counting, camelCase, palindromes
//! - `caliper-core`: the shared error surface
//!
//! plus the incidental greeting and date-formatting helpers.

mod date;
mod greet;

pub use date::format_date;
pub use greet::{greet, greet_world};

pub use caliper_core::{CaliperError, ErrorKind};
pub use caliper_math::{add, divide, log, log10, multiply, power, sqrt, subtract};
pub use caliper_text::{capitalize, count_vowels, is_palindrome, reverse, to_camel_case};
pub use caliper_units::{
    celsius_to_fahrenheit, celsius_to_kelvin, convert, fahrenheit_to_celsius, feet_to_meters,
    grams_to_ounces, inches_to_meters, kelvin_to_celsius, kilograms_to_pounds,
    kilometers_to_miles, meters_to_feet, meters_to_inches, miles_to_kilometers, normalize_unit,
    ounces_to_grams, pounds_to_kilograms,
};
