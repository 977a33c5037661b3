//! Demonstration walk through the caliper API.
//!
//! Runs every family of operations once and logs the results; failures
//! from the library surface propagate out of `main`.

use caliper::{
    add, celsius_to_fahrenheit, celsius_to_kelvin, convert, count_vowels, divide, format_date,
    greet_world, is_palindrome, kilograms_to_pounds, log10, meters_to_feet, power, reverse, sqrt,
    to_camel_case, CaliperError,
};
use tracing::{info, warn};

fn main() -> Result<(), CaliperError> {
    tracing_subscriber::fmt().init();

    info!("{}", greet_world());
    info!("today is {}", format_date(chrono::Local::now().naive_local()));

    info!("5 + 3 = {}", add(5.0, 3.0)?);
    info!("10 / 4 = {}", divide(10.0, 4.0)?);
    info!("2^10 = {}", power(2.0, 10.0)?);
    info!("sqrt(2) = {}", sqrt(2.0)?);
    info!("log10(1000) = {}", log10(1000.0)?);
    match divide(1.0, 0.0) {
        Ok(_) => unreachable!(),
        Err(e) => warn!("1 / 0 rejected: {}", e),
    }

    info!("100 C = {} F", celsius_to_fahrenheit(100.0)?);
    info!("0 C = {} K", celsius_to_kelvin(0.0)?);
    info!("1 m = {} ft", meters_to_feet(1.0)?);
    info!("70 kg = {} lb", kilograms_to_pounds(70.0)?);
    info!("100 km = {} miles", convert(100.0, "km", "miles")?);

    info!("reverse(\"caliper\") = {}", reverse("caliper"));
    info!("count_vowels(\"utilities\") = {}", count_vowels("utilities"));
    info!("to_camel_case(\"unit_converter\") = {}", to_camel_case("unit_converter"));
    info!("is_palindrome(\"racecar\") = {}", is_palindrome("racecar"));

    Ok(())
}
