//! Combinators that carry a constraint over absent values, sequences and
//! struct members.
//!
//! - [`Optional`]: `None` is valid
//! - [`Each`]: every element is validated, failures keep their index
//! - [`Field`]: a named member, failures get the member name as path
//! - [`And`]: both validators must pass

pub mod and;
pub mod each;
pub mod field;
pub mod optional;

pub use and::{And, and};
pub use each::{EACH_FAILED, Each, each, each_fail_fast};
pub use field::{Field, field};
pub use optional::{Optional, optional};
