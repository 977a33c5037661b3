//! Basic arithmetic: add, subtract, multiply, divide

use caliper_core::prelude::*;

/// Finite inputs can still produce an infinite sum/product near f64::MAX;
/// surface that as an overflow instead of propagating infinity.
fn checked(result: f64) -> Result<f64, CaliperError> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CaliperError::Overflow)
    }
}

pub fn add(a: f64, b: f64) -> Result<f64, CaliperError> {
    let a = ensure_finite(a, "a")?;
    let b = ensure_finite(b, "b")?;
    checked(a + b)
}

pub fn subtract(a: f64, b: f64) -> Result<f64, CaliperError> {
    let a = ensure_finite(a, "a")?;
    let b = ensure_finite(b, "b")?;
    checked(a - b)
}

pub fn multiply(a: f64, b: f64) -> Result<f64, CaliperError> {
    let a = ensure_finite(a, "a")?;
    let b = ensure_finite(b, "b")?;
    checked(a * b)
}

/// Divide `a` by `b`. Zero divisors of either sign are rejected.
pub fn divide(a: f64, b: f64) -> Result<f64, CaliperError> {
    let a = ensure_finite(a, "a")?;
    let b = ensure_finite(b, "b")?;
    if b == 0.0 {
        return Err(CaliperError::DivisionByZero);
    }
    Ok(a / b)
}
