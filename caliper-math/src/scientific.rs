//! Scientific operations: power, sqrt, log

use caliper_core::prelude::*;

/// Raise `a` to the power `b`.
///
/// An infinite result from finite inputs is an overflow. A NaN result
/// (negative base with a fractional exponent) is a domain error.
pub fn power(a: f64, b: f64) -> Result<f64, CaliperError> {
    let a = ensure_finite(a, "base")?;
    let b = ensure_finite(b, "exponent")?;
    let result = a.powf(b);
    if result.is_nan() {
        return Err(CaliperError::domain(format!(
            "{}^{} has no real value",
            a, b
        )));
    }
    if result.is_infinite() {
        return Err(CaliperError::Overflow);
    }
    Ok(result)
}

/// Square root of a non-negative number.
pub fn sqrt(a: f64) -> Result<f64, CaliperError> {
    let a = ensure_finite(a, "a")?;
    if a < 0.0 {
        return Err(CaliperError::domain(
            "cannot take the square root of a negative number",
        ));
    }
    Ok(a.sqrt())
}

/// Logarithm of `a` in the given base.
pub fn log(a: f64, base: f64) -> Result<f64, CaliperError> {
    let a = ensure_finite(a, "a")?;
    let base = ensure_finite(base, "base")?;
    if a <= 0.0 {
        return Err(CaliperError::domain(
            "cannot take the logarithm of a non-positive number",
        ));
    }
    if base <= 0.0 {
        return Err(CaliperError::domain("logarithm base must be positive"));
    }
    if base == 1.0 {
        return Err(CaliperError::domain("logarithm base cannot be 1"));
    }
    Ok(a.ln() / base.ln())
}

/// Base-10 logarithm, the default base of `log`.
pub fn log10(a: f64) -> Result<f64, CaliperError> {
    log(a, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 3.0).unwrap(), 8.0);
        assert_eq!(power(4.0, 0.5).unwrap(), 2.0);
        assert_eq!(power(10.0, 0.0).unwrap(), 1.0);
        assert_eq!(power(2.0, -2.0).unwrap(), 0.25);
    }

    #[test]
    fn test_power_overflow() {
        assert_eq!(power(10.0, 400.0).unwrap_err(), CaliperError::Overflow);
        assert_eq!(power(f64::MAX, 2.0).unwrap_err(), CaliperError::Overflow);
    }

    #[test]
    fn test_power_negative_base_fractional_exponent() {
        let err = power(-8.0, 0.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        // Integer exponents of negative bases stay fine.
        assert_eq!(power(-2.0, 3.0).unwrap(), -8.0);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(16.0).unwrap(), 4.0);
        assert_eq!(sqrt(0.0).unwrap(), 0.0);
        assert!((sqrt(2.0).unwrap() - 1.4142135623730951).abs() < EPSILON);
    }

    #[test]
    fn test_sqrt_negative_fails_range() {
        let err = sqrt(-1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = sqrt(-1e-12).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_log() {
        assert!((log(100.0, 10.0).unwrap() - 2.0).abs() < EPSILON);
        assert!((log(8.0, 2.0).unwrap() - 3.0).abs() < EPSILON);
        assert!((log10(1000.0).unwrap() - 3.0).abs() < EPSILON);
        assert!((log(std::f64::consts::E, std::f64::consts::E).unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_log_domain_errors() {
        assert_eq!(log(0.0, 10.0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(log(-5.0, 10.0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(log(10.0, 0.0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(log(10.0, -2.0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(log(10.0, 1.0).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert_eq!(power(f64::NAN, 2.0).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(sqrt(f64::INFINITY).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(log(f64::NAN, 10.0).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(log(10.0, f64::INFINITY).unwrap_err().kind(), ErrorKind::Type);
    }
}
