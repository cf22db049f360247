//! Prelude module for convenient imports.
//!
//! Provides a single `use gauge_validator::prelude::*;` import that brings
//! in the traits, error types, validators and combinators.
//!
//! # Examples
//!
//! ```rust
//! use gauge_validator::prelude::*;
//!
//! let zip = byte_size(7, 8, None)?;
//! let issued = after::<chrono::NaiveDate>("2016-01-01")?;
//! # let _ = (zip, issued);
//! # Ok::<(), InitError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    InitError, InvalidArgument, Validate, ValidateExt, ValidationError, ValidationErrors,
    validate_with_all,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Each, Field, Optional, and, each, each_fail_fast, field, optional,
};

// ============================================================================
// SCHEMA-GATED: Declarative JSON constraints
// ============================================================================

#[cfg(feature = "schema")]
pub use crate::schema::{CompiledSchema, ConstraintDef, ConstraintSchema};
