//! Error type shared by every caliper crate
//!
//! Errors are values, never panics. They propagate synchronously to the
//! caller; nothing is retried or recovered internally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad classification of an error.
///
/// `Type` covers arguments that are not a usable value at all (NaN, infinity,
/// an unrecognized unit symbol). `Range` covers legal values that fall outside
/// the domain of the operation, divide-by-zero included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Type,
    Range,
}

/// Error type for caliper operations
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum CaliperError {
    #[error("{what} must be a finite number")]
    NonFinite { what: String },

    #[error("{what} must not be negative, got {value}")]
    Negative { what: String, value: f64 },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Temperature below absolute zero: {kelvin} K")]
    BelowAbsoluteZero { kelvin: f64 },

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Overflow: result too large")]
    Overflow,

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Cannot convert {from} to {to}")]
    UnsupportedConversion { from: String, to: String },
}

impl CaliperError {
    /// Classify this error as a type error or a range error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CaliperError::NonFinite { .. } | CaliperError::UnknownUnit(_) => ErrorKind::Type,
            CaliperError::Negative { .. }
            | CaliperError::DivisionByZero
            | CaliperError::BelowAbsoluteZero { .. }
            | CaliperError::Domain(_)
            | CaliperError::Overflow
            | CaliperError::UnsupportedConversion { .. } => ErrorKind::Range,
        }
    }

    pub fn non_finite(what: impl Into<String>) -> Self {
        CaliperError::NonFinite { what: what.into() }
    }

    pub fn negative(what: impl Into<String>, value: f64) -> Self {
        CaliperError::Negative { what: what.into(), value }
    }

    pub fn domain(details: impl Into<String>) -> Self {
        CaliperError::Domain(details.into())
    }

    pub fn unknown_unit(symbol: impl Into<String>) -> Self {
        CaliperError::UnknownUnit(symbol.into())
    }

    pub fn unsupported_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        CaliperError::UnsupportedConversion { from: from.into(), to: to.into() }
    }
}
