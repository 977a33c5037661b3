//! Numeric input validation and output rounding
//!
//! Static `f64` parameters already rule out most bad inputs; what remains
//! is rejecting non-finite values and enforcing range floors. Every
//! operation in the workspace runs its inputs through these guards before
//! touching a formula.

use crate::{CaliperError, ErrorKind};

/// Reject NaN and infinities.
///
/// A NaN or infinite argument is classified as [`ErrorKind::Type`]: it is not
/// a usable number at all, as opposed to a number outside a legal range.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, CaliperError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CaliperError::non_finite(what))
    }
}

/// Reject non-finite and negative values.
pub fn ensure_non_negative(v: f64, what: &'static str) -> Result<f64, CaliperError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(CaliperError::negative(what, v));
    }
    Ok(v)
}

/// Validate a Kelvin temperature (absolute-zero floor).
pub fn ensure_kelvin(v: f64) -> Result<f64, CaliperError> {
    let v = ensure_finite(v, "kelvin")?;
    if v < 0.0 {
        return Err(CaliperError::BelowAbsoluteZero { kelvin: v });
    }
    Ok(v)
}

/// Round to `places` decimal digits, half away from zero.
///
/// Conversion formulas run at full f64 precision; rounding happens only at
/// the output boundary.
pub fn round_to(v: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (v * factor).round() / factor
}

/// Shorthand used by error-classification tests and callers that only care
/// whether a failure was a type or a range problem.
pub fn kind_of(result: &Result<f64, CaliperError>) -> Option<ErrorKind> {
    result.as_ref().err().map(|e| e.kind())
}
