//! Caliper Core - Fundamental types
//!
//! This crate provides the pieces shared by every caliper crate:
//! - `CaliperError` / `ErrorKind`: the workspace error surface
//! - validation guards (`ensure_finite`, `ensure_non_negative`, `ensure_kelvin`)
//! - `round_to`: output rounding for the conversion functions

mod error;
mod validate;

pub use error::{CaliperError, ErrorKind};
pub use validate::{ensure_finite, ensure_kelvin, ensure_non_negative, kind_of, round_to};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ensure_finite, ensure_kelvin, ensure_non_negative, round_to, CaliperError, ErrorKind,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    mod error_tests {
        use super::*;

        #[test]
        fn test_kind_classification() {
            assert_eq!(CaliperError::non_finite("x").kind(), ErrorKind::Type);
            assert_eq!(
                CaliperError::UnknownUnit("furlong".to_string()).kind(),
                ErrorKind::Type
            );
            assert_eq!(CaliperError::DivisionByZero.kind(), ErrorKind::Range);
            assert_eq!(
                CaliperError::negative("meters", -1.0).kind(),
                ErrorKind::Range
            );
            assert_eq!(CaliperError::Overflow.kind(), ErrorKind::Range);
            assert_eq!(
                CaliperError::domain("log of non-positive number").kind(),
                ErrorKind::Range
            );
        }

        #[test]
        fn test_display() {
            let err = CaliperError::negative("meters", -2.5);
            assert_eq!(format!("{}", err), "meters must not be negative, got -2.5");

            let err = CaliperError::unsupported_conversion("kg", "ft");
            assert_eq!(format!("{}", err), "Cannot convert kg to ft");
        }

        #[test]
        fn test_serializes_to_json() {
            let err = CaliperError::DivisionByZero;
            let json = serde_json::to_string(&err).unwrap();
            assert_eq!(json, "\"DivisionByZero\"");

            let err = CaliperError::BelowAbsoluteZero { kelvin: -26.85 };
            let json = serde_json::to_string(&err).unwrap();
            assert!(json.contains("-26.85"), "should carry the value: {}", json);

            let kind = ErrorKind::Range;
            assert_eq!(serde_json::to_string(&kind).unwrap(), "\"range\"");
        }

        #[test]
        fn test_roundtrips_through_json() {
            let err = CaliperError::unsupported_conversion("kg", "ft");
            let json = serde_json::to_string(&err).unwrap();
            let back: CaliperError = serde_json::from_str(&json).unwrap();
            assert_eq!(back, err);
        }
    }

    mod validate_tests {
        use super::*;

        #[test]
        fn test_kind_of() {
            assert_eq!(kind_of(&Ok(1.0)), None);
            assert_eq!(
                kind_of(&Err(CaliperError::non_finite("x"))),
                Some(ErrorKind::Type)
            );
            assert_eq!(
                kind_of(&Err(CaliperError::DivisionByZero)),
                Some(ErrorKind::Range)
            );
        }

        #[test]
        fn test_guards_compose() {
            // Non-finite wins over negative: NaN is a type problem, not a range one.
            let err = ensure_non_negative(f64::NAN, "x").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type);
            let err = ensure_kelvin(f64::NEG_INFINITY).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type);
        }
    }
}
