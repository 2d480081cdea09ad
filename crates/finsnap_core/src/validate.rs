//! Validation of user-entered snapshot fields.
//!
//! Runs before any network traffic: a field that fails here aborts the
//! analysis cycle locally.

use std::fmt;

use crate::protocol::AnalysisInput;

/// A snapshot field that failed local validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NotANumber { field: &'static str },
    Negative { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotANumber { field } => write!(f, "{field} is not a number"),
            ValidationError::Negative { field } => write!(f, "{field} must be non-negative"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse the three raw input buffers into a validated [`AnalysisInput`].
///
/// Each field must parse as a finite, non-negative number. `inf`/`NaN` parse
/// successfully as `f64` but are rejected here.
pub fn parse_input(
    revenue: &str,
    expenses: &str,
    cash: &str,
) -> Result<AnalysisInput, ValidationError> {
    Ok(AnalysisInput {
        revenue: parse_field("revenue", revenue)?,
        expenses: parse_field("expenses", expenses)?,
        cash: parse_field("cash", cash)?,
    })
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(value)
}
