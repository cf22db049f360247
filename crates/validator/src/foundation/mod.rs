//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Value failures**: [`ValidationError`], [`ValidationErrors`]
//! - **Configuration failures**: [`InitError`], [`InvalidArgument`]
//!
//! The two error families never mix. Building a validator returns
//! `Result<_, InitError>`; evaluating one returns
//! `Result<(), ValidationError>`.
//!
//! ```
//! use gauge_validator::foundation::Validate;
//! use gauge_validator::validators::ByteSize;
//!
//! assert!(ByteSize::new(-1, 10, None).is_err()); // configuration error
//!
//! let validator = ByteSize::new(3, 6, None)?;
//! assert!(validator.validate("aa").is_err()); // value error
//! # Ok::<(), gauge_validator::foundation::InitError>(())
//! ```

pub mod error;
pub mod init;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use init::{InitError, InvalidArgument};
pub use traits::{Validate, ValidateExt};

/// Validates a value with several validators, collecting every failure.
///
/// # Examples
///
/// ```
/// use gauge_validator::foundation::{Validate, validate_with_all};
/// use gauge_validator::validators::ByteSize;
///
/// let short = ByteSize::new(0, 4, None)?;
/// let shift_jis = ByteSize::new(0, 2, Some("shift_jis"))?;
///
/// let errors = validate_with_all("あa", &[&short, &shift_jis]).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.errors()[0].param("encoding"), Some("Shift_JIS"));
/// # Ok::<(), gauge_validator::foundation::InitError>(())
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}
