//! Byte-size validator
//!
//! Bounds the length of text measured in bytes of a chosen encoding, which
//! is what fixed-width storage columns and legacy interfaces actually limit.
//! UTF-8 is the default; any [`Charset`] label may be configured.
//!
//! ```
//! use gauge_validator::prelude::*;
//!
//! let name = byte_size(3, 6, Some("shift_jis"))?;
//! assert!(!name.is_valid("あ"));     // 2 bytes
//! assert!(name.is_valid("あa"));     // 3 bytes
//! assert!(!name.is_valid("あああa")); // 7 bytes
//! # Ok::<(), gauge_validator::foundation::InitError>(())
//! ```

use crate::foundation::{InitError, InvalidArgument, ValidationError};
use crate::validators::Charset;
use serde::Deserialize;

/// Constraint name used in errors and schemas.
pub const BYTE_SIZE: &str = "byte_size";

// ============================================================================
// PARAMETERS
// ============================================================================

/// Declared parameters of a byte-size constraint.
///
/// Every field has a default, so `{}` deserializes to "any length, UTF-8".
///
/// ```
/// use gauge_validator::validators::ByteSizeParams;
///
/// let params: ByteSizeParams = serde_json::from_str(r#"{"max": 6, "encoding": "sjis"}"#)?;
/// assert_eq!(params.min, 0);
/// assert_eq!(params.max, 6);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ByteSizeParams {
    /// Lower bound in bytes, inclusive.
    pub min: i64,
    /// Upper bound in bytes, inclusive.
    pub max: i64,
    /// Encoding name; `None` means UTF-8.
    #[serde(alias = "charset")]
    pub encoding: Option<String>,
}

impl Default for ByteSizeParams {
    fn default() -> Self {
        Self {
            min: 0,
            max: i64::MAX,
            encoding: None,
        }
    }
}

// ============================================================================
// BYTE SIZE
// ============================================================================

crate::validator! {
    /// Validates that text encodes to between `min` and `max` bytes
    /// (inclusive) in `charset`.
    ///
    /// Construction rejects negative bounds, `max < min` and unknown
    /// encodings. Absent values are handled by wrapping in
    /// [`Optional`](crate::combinators::Optional).
    #[derive(PartialEq, Eq)]
    pub ByteSize { min: u64, max: u64, charset: Charset } for str;
    rule(self, input) {
        let len = self.charset.byte_len(input);
        len >= self.min && len <= self.max
    }
    error(self, input) {
        ValidationError::new(
            BYTE_SIZE,
            format!("must be between {} and {} bytes", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", self.charset.byte_len(input).to_string())
        .with_param("encoding", self.charset.name())
    }
    new(min: i64, max: i64, encoding: Option<&str>) -> InitError {
        let checked = check_bounds(min, max).and_then(|(min, max)| {
            let charset = match encoding {
                None => Charset::Utf8,
                Some(name) => Charset::for_label(name).ok_or_else(|| {
                    InvalidArgument::UnsupportedEncoding { name: name.to_owned() }
                })?,
            };
            Ok(Self { min, max, charset })
        });

        match checked {
            Ok(validator) => {
                tracing::debug!(
                    min = validator.min,
                    max = validator.max,
                    encoding = validator.charset.name(),
                    "configured byte size validator"
                );
                Ok(validator)
            }
            Err(cause) => {
                tracing::warn!(error = %cause, "byte size validator rejected its parameters");
                Err(InitError::new(BYTE_SIZE, cause))
            }
        }
    }
    fn byte_size(min: i64, max: i64, encoding: Option<&str>) -> InitError;
}

impl ByteSize {
    /// Builds the validator from declared parameters.
    pub fn from_params(params: &ByteSizeParams) -> Result<Self, InitError> {
        Self::new(params.min, params.max, params.encoding.as_deref())
    }

    /// A validator with only an upper bound.
    pub fn at_most(max: i64) -> Result<Self, InitError> {
        Self::new(0, max, None)
    }

    /// A validator with only a lower bound.
    pub fn at_least(min: i64) -> Result<Self, InitError> {
        Self::new(min, i64::MAX, None)
    }
}

fn check_bounds(min: i64, max: i64) -> Result<(u64, u64), InvalidArgument> {
    let min = u64::try_from(min).map_err(|_| InvalidArgument::NegativeBound {
        name: "min",
        value: min,
    })?;
    let max_unsigned = u64::try_from(max).map_err(|_| InvalidArgument::NegativeBound {
        name: "max",
        value: max,
    })?;
    if max_unsigned < min {
        return Err(InvalidArgument::MaxBelowMin {
            min: min as i64,
            max,
        });
    }
    Ok((min, max_unsigned))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("aa", false)]
    #[case("あ", true)]
    #[case("ああ", true)]
    #[case("ああa", false)]
    fn utf8_between_three_and_six(#[case] input: &str, #[case] valid: bool) {
        let validator = ByteSize::new(3, 6, None).unwrap();
        assert_eq!(validator.is_valid(input), valid);
    }

    #[test]
    fn error_carries_bounds_and_actual() {
        let error = ByteSize::new(3, 6, None).unwrap().validate("aa").unwrap_err();
        assert_eq!(error.code, BYTE_SIZE);
        assert_eq!(error.message, "must be between 3 and 6 bytes");
        assert_eq!(error.param("actual"), Some("2"));
        assert_eq!(error.param("encoding"), Some("UTF-8"));
    }

    #[test]
    fn defaults_accept_everything() {
        let validator = ByteSize::from_params(&ByteSizeParams::default()).unwrap();
        assert_eq!(validator.max, i64::MAX as u64);
        assert!(validator.is_valid(""));
        assert!(validator.is_valid(&"0".repeat(100_000)));
    }

    #[test]
    fn equal_bounds() {
        let validator = ByteSize::new(3, 3, None).unwrap();
        assert!(validator.is_valid("あ"));
        assert!(!validator.is_valid("aa"));
        assert!(!validator.is_valid("あa"));
    }

    #[rstest]
    #[case(-1, 6, InvalidArgument::NegativeBound { name: "min", value: -1 })]
    #[case(0, -1, InvalidArgument::NegativeBound { name: "max", value: -1 })]
    #[case(-5, -1, InvalidArgument::NegativeBound { name: "min", value: -5 })]
    #[case(3, 2, InvalidArgument::MaxBelowMin { min: 3, max: 2 })]
    fn rejects_bad_bounds(#[case] min: i64, #[case] max: i64, #[case] expected: InvalidArgument) {
        let err = ByteSize::new(min, max, None).unwrap_err();
        assert_eq!(err.cause(), &expected);
        assert_eq!(err.constraint(), BYTE_SIZE);
    }

    #[test]
    fn rejects_unknown_encoding() {
        let err = ByteSize::new(3, 6, Some("illegal-charset")).unwrap_err();
        assert!(matches!(
            err.cause(),
            InvalidArgument::UnsupportedEncoding { name } if name == "illegal-charset"
        ));
    }

    #[test]
    fn bounds_are_checked_before_encoding() {
        let err = ByteSize::new(-1, 6, Some("illegal-charset")).unwrap_err();
        assert!(matches!(err.cause(), InvalidArgument::NegativeBound { .. }));
    }

    #[test]
    fn single_bound_constructors() {
        assert!(ByteSize::at_most(3).unwrap().is_valid("あ"));
        assert!(!ByteSize::at_most(2).unwrap().is_valid("あ"));
        assert!(ByteSize::at_least(2).unwrap().is_valid("あ"));
        assert!(ByteSize::at_least(-2).is_err());
    }

    #[test]
    fn params_deserialize_with_charset_alias() {
        let params: ByteSizeParams =
            serde_json::from_str(r#"{"min": 3, "max": 6, "charset": "shift-jis"}"#).unwrap();
        assert_eq!(params.encoding.as_deref(), Some("shift-jis"));

        let validator = ByteSize::from_params(&params).unwrap();
        assert_eq!(validator.charset.name(), "Shift_JIS");
    }
}
