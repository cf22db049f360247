//! Before / after validators
//!
//! The boundary is parsed once when the validator is built; a malformed
//! date or pattern is an [`InitError`]. Evaluation is a strict comparison:
//! a value equal to the boundary is neither after nor before it.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use gauge_validator::prelude::*;
//!
//! let from = After::<chrono::DateTime<Utc>>::new("2016-01-01T00:00:00Z", None)?;
//! assert!(from.is_valid(&Utc.with_ymd_and_hms(2016, 1, 2, 0, 0, 0).unwrap()));
//! assert!(!from.is_valid(&Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()));
//! # Ok::<(), gauge_validator::foundation::InitError>(())
//! ```

use crate::foundation::{InitError, InvalidArgument, Validate, ValidationError};
use crate::validators::Instant;
use serde::Deserialize;
use std::fmt;

/// Constraint name of [`After`].
pub const AFTER: &str = "after";

/// Constraint name of [`Before`].
pub const BEFORE: &str = "before";

// ============================================================================
// PARAMETERS
// ============================================================================

/// Declared parameters of a before/after constraint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemporalParams {
    /// The boundary date.
    #[serde(alias = "value")]
    pub date: String,
    /// Optional strftime pattern for `date`; absent or empty means ISO-8601.
    #[serde(default, alias = "pattern")]
    pub format: Option<String>,
}

impl TemporalParams {
    /// Parameters with an ISO-8601 boundary.
    pub fn iso(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            format: None,
        }
    }
}

/// A parsed boundary together with the text it was declared as.
#[derive(Clone, PartialEq)]
struct Boundary<T> {
    value: T,
    date: String,
    format: Option<String>,
}

impl<T: Instant> Boundary<T> {
    fn parse(constraint: &'static str, date: &str, format: Option<&str>) -> Result<Self, InitError> {
        match T::parse_boundary(date, format) {
            Ok(value) => {
                tracing::debug!(constraint, date, format, kind = T::KIND, "configured temporal validator");
                Ok(Self {
                    value,
                    date: date.to_owned(),
                    format: format.map(str::to_owned),
                })
            }
            Err(source) => {
                tracing::warn!(constraint, date, format, error = %source, "temporal validator rejected its boundary");
                Err(InitError::new(
                    constraint,
                    InvalidArgument::UnparsableDate {
                        date: date.to_owned(),
                        format: format.map(str::to_owned),
                        source,
                    },
                ))
            }
        }
    }

    fn error(&self, code: &'static str) -> ValidationError {
        let error = ValidationError::new(code, format!("must be {code} {}", self.date))
            .with_param("date", self.date.clone())
            .with_param("kind", T::KIND);
        match &self.format {
            Some(format) => error.with_param("format", format.clone()),
            None => error,
        }
    }
}

impl<T> fmt::Debug for Boundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boundary")
            .field("date", &self.date)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// AFTER
// ============================================================================

/// Validates that a value is strictly after the configured boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct After<T> {
    boundary: Boundary<T>,
}

impl<T: Instant> After<T> {
    /// Parses `date` (with `format`, or ISO-8601 when `None` or empty).
    pub fn new(date: &str, format: Option<&str>) -> Result<Self, InitError> {
        Boundary::parse(AFTER, date, format).map(|boundary| Self { boundary })
    }

    /// Builds the validator from declared parameters.
    pub fn from_params(params: &TemporalParams) -> Result<Self, InitError> {
        Self::new(&params.date, params.format.as_deref())
    }

    /// The parsed boundary.
    pub fn boundary(&self) -> &T {
        &self.boundary.value
    }
}

impl<T: Instant> Validate for After<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if *input > self.boundary.value {
            Ok(())
        } else {
            Err(self.boundary.error(AFTER))
        }
    }
}

/// Creates an [`After`] validator with an ISO-8601 boundary.
pub fn after<T: Instant>(date: &str) -> Result<After<T>, InitError> {
    After::new(date, None)
}

// ============================================================================
// BEFORE
// ============================================================================

/// Validates that a value is strictly before the configured boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Before<T> {
    boundary: Boundary<T>,
}

impl<T: Instant> Before<T> {
    /// Parses `date` (with `format`, or ISO-8601 when `None` or empty).
    pub fn new(date: &str, format: Option<&str>) -> Result<Self, InitError> {
        Boundary::parse(BEFORE, date, format).map(|boundary| Self { boundary })
    }

    /// Builds the validator from declared parameters.
    pub fn from_params(params: &TemporalParams) -> Result<Self, InitError> {
        Self::new(&params.date, params.format.as_deref())
    }

    /// The parsed boundary.
    pub fn boundary(&self) -> &T {
        &self.boundary.value
    }
}

impl<T: Instant> Validate for Before<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if *input < self.boundary.value {
            Ok(())
        } else {
            Err(self.boundary.error(BEFORE))
        }
    }
}

/// Creates a [`Before`] validator with an ISO-8601 boundary.
pub fn before<T: Instant>(date: &str) -> Result<Before<T>, InitError> {
    Before::new(date, None)
}

// ============================================================================
// TESTS
// ============================================================================
