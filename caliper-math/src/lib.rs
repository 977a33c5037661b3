//! Caliper Math - Arithmetic engine
//!
//! Six pure operations over `f64`, each validating every input before
//! computing: add, subtract, multiply, divide, power, sqrt, log. All return
//! `Result<f64, CaliperError>`; nothing panics.

mod basic;
mod scientific;

pub use basic::{add, divide, multiply, subtract};
pub use scientific::{log, log10, power, sqrt};
