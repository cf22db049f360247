//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Examples
///
/// ```
/// use gauge_validator::prelude::*;
///
/// // at most 6 bytes in UTF-8 and at most 4 in Shift_JIS
/// let validator = ByteSize::new(0, 6, None)?.and(ByteSize::new(0, 4, Some("sjis"))?);
/// assert!(validator.is_valid("ああ"));
/// assert!(!validator.is_valid("ああa"));
/// # Ok::<(), gauge_validator::foundation::InitError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an AND combinator.
pub fn and<L, R>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}
