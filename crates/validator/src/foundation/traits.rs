//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The evaluation hook every validator implements.
///
/// A validator is constructed once (construction may fail with an
/// [`InitError`](crate::foundation::InitError)) and then evaluated any number
/// of times. Evaluation is pure: it takes `&self`, performs no I/O and
/// returns `Err` only when the value breaks the constraint.
///
/// # Examples
///
/// ```
/// use gauge_validator::foundation::{Validate, ValidationError};
///
/// struct NonBlank;
///
/// impl Validate for NonBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("non_blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonBlank.is_valid("x"));
/// assert!(!NonBlank.is_valid("  "));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Validate::validate) succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// # Examples
///
/// ```
/// use gauge_validator::prelude::*;
///
/// let name = ByteSize::new(3, 6, None)?.optional::<String>();
/// assert!(name.is_valid(&None));
/// assert!(name.is_valid(&Some("あ".to_string())));
/// assert!(!name.is_valid(&Some("aa".to_string())));
/// # Ok::<(), gauge_validator::foundation::InitError>(())
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass; the first failure is reported.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Accepts `None` and validates the content of `Some`.
    ///
    /// `E` is the owned element type, e.g. `String` for a `str` validator.
    fn optional<E>(self) -> Optional<Self, E>
    where
        E: std::borrow::Borrow<Self::Input>,
    {
        Optional::new(self)
    }

    /// Validates every element of a slice, collecting all failures.
    fn each<E>(self) -> Each<Self, E>
    where
        E: std::borrow::Borrow<Self::Input>,
    {
        Each::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::each::Each;
pub use crate::combinators::optional::Optional;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        let validator = AlwaysValid;
        assert!(validator.validate("test").is_ok());
        assert!(validator.is_valid("test"));
    }

    #[test]
    fn test_reference_and_box_forward() {
        let by_ref = &AlwaysValid;
        assert!(by_ref.is_valid("x"));

        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.is_valid("x"));
    }
}
