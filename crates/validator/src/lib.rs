//! # gauge-validator
//!
//! Byte-size and before/after constraints for field values, built on a
//! small composable validation core.
//!
//! ## Quick Start
//!
//! ```rust
//! use gauge_validator::prelude::*;
//!
//! // Shift_JIS counts kana as two bytes
//! let code = byte_size(0, 6, Some("shift_jis"))?;
//! assert!(code.validate("あいう").is_ok());
//! assert!(code.validate("あいうa").is_err());
//!
//! // Absent values are valid once wrapped
//! let nickname = byte_size(3, 12, None)?.optional::<String>();
//! assert!(nickname.validate(&None).is_ok());
//! # Ok::<(), gauge_validator::foundation::InitError>(())
//! ```
//!
//! ## Two Kinds of Failure
//!
//! Bad configuration (a negative bound, an unknown encoding, an unparsable
//! boundary date) fails when the validator is built, as an
//! [`InitError`](foundation::InitError). A value that breaks a constraint
//! fails at evaluation, as a [`ValidationError`](foundation::ValidationError).
//!
//! ## Built-in Validators
//!
//! - **Byte size**: [`ByteSize`](validators::ByteSize) over any
//!   [`Charset`](validators::Charset)
//! - **Temporal**: [`After`](validators::After), [`Before`](validators::Before)
//!   for any [`Instant`](validators::Instant)
//!
//! With the `schema` feature, constraints can also be declared in JSON and
//! applied to `serde_json` documents (see [`schema`]).

// ValidationError is the error type of every validator; boxing it would add
// indirection to every validation call.
#![allow(clippy::result_large_err)]
// Nested combinators (Field<_, _, Each<Optional<..>>, _>) produce deep types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
#[cfg(feature = "schema")]
pub mod schema;
pub mod validators;
