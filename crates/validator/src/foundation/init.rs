//! Configuration errors raised when a validator is built.
//!
//! A constraint whose parameters make no sense (a negative bound, an
//! inverted range, an unknown encoding, an unparsable boundary date) is
//! rejected once, at construction. Evaluation of a successfully built
//! validator never produces an [`InitError`].

use std::borrow::Cow;

/// The specific reason a constraint's parameters were rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    /// A size bound below zero.
    #[error("{name}[{value}] must not be negative value.")]
    NegativeBound {
        /// Parameter name, `min` or `max`.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// `max` smaller than `min`.
    #[error("max[{max}] must be higher or equal to min[{min}].")]
    MaxBelowMin {
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },

    /// The encoding name matched no known encoding.
    #[error("encoding[{name}] is not supported.")]
    UnsupportedEncoding {
        /// The name as configured.
        name: String,
    },

    /// The boundary date (or its format) could not be parsed.
    #[error("date[{date}] could not be parsed{}.", format_suffix(.format.as_deref()))]
    UnparsableDate {
        /// The boundary date as configured.
        date: String,
        /// The format pattern, when one was given.
        format: Option<String>,
        /// The parser's error.
        #[source]
        source: chrono::ParseError,
    },
}

fn format_suffix(format: Option<&str>) -> String {
    format.map(|f| format!(" with format[{f}]")).unwrap_or_default()
}

/// A constraint could not be initialized from its parameters.
///
/// The display message is the same for every cause; the cause itself is
/// available through [`InitError::cause`] and [`std::error::Error::source`].
///
/// # Examples
///
/// ```
/// use gauge_validator::foundation::InvalidArgument;
/// use gauge_validator::validators::ByteSize;
///
/// let err = ByteSize::new(3, 2, None).unwrap_err();
/// assert_eq!(err.to_string(), "failed to initialize validator by invalid argument");
/// assert_eq!(err.cause(), &InvalidArgument::MaxBelowMin { min: 3, max: 2 });
/// assert_eq!(err.cause().to_string(), "max[2] must be higher or equal to min[3].");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to initialize validator by invalid argument")]
pub struct InitError {
    constraint: &'static str,
    field: Option<Cow<'static, str>>,
    #[source]
    cause: InvalidArgument,
}

impl InitError {
    /// Creates an error for the named constraint.
    pub fn new(constraint: &'static str, cause: InvalidArgument) -> Self {
        Self {
            constraint,
            field: None,
            cause,
        }
    }

    /// Records which declared member the failing constraint belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Name of the constraint that failed to initialize (`byte_size`,
    /// `after`, `before`).
    #[must_use]
    pub fn constraint(&self) -> &'static str {
        self.constraint
    }

    /// The member the constraint was declared on, when known.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The rejected parameter and why.
    #[must_use]
    pub fn cause(&self) -> &InvalidArgument {
        &self.cause
    }
}
