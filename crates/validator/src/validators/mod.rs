//! Built-in constraint validators
//!
//! - **Byte size**: [`ByteSize`] bounds text by its encoded length in a
//!   [`Charset`]
//! - **Temporal**: [`After`] / [`Before`] compare an [`Instant`] against a
//!   boundary parsed at construction
//!
//! Every validator here is built through a fallible constructor; once
//! built, evaluation never fails for anything but the value itself.

pub mod byte_size;
pub mod charset;
pub mod instant;
pub mod temporal;

pub use byte_size::{BYTE_SIZE, ByteSize, ByteSizeParams, byte_size};
pub use charset::Charset;
pub use instant::Instant;
pub use temporal::{AFTER, After, BEFORE, Before, TemporalParams, after, before};
