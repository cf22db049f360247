//! FIELD combinator - validates a named member of a struct
//!
//! Lets a form-like struct attach constraints to its members without
//! derive macros. Errors raised by the member's validator get the member
//! name prepended to their path.

use crate::foundation::{Validate, ValidationError};
use std::borrow::Cow;
use std::marker::PhantomData;

// ============================================================================
// FIELD COMBINATOR
// ============================================================================

/// Validates one member of `T`, reached through `accessor`.
///
/// # Type Parameters
///
/// * `T` - The parent struct type
/// * `U` - The member type (can be `?Sized`)
/// * `V` - The validator type
/// * `F` - The accessor function type
///
/// # Examples
///
/// ```
/// use gauge_validator::prelude::*;
///
/// struct Form {
///     tags: Vec<String>,
/// }
///
/// let tags = field(
///     "tags",
///     ByteSize::new(3, 6, None)?.each::<String>(),
///     |form: &Form| form.tags.as_slice(),
/// );
///
/// let form = Form { tags: vec!["ああ".into(), "ああa".into()] };
/// let error = tags.validate(&form).unwrap_err();
/// assert_eq!(error.nested[0].field.as_deref(), Some("tags[1]"));
/// # Ok::<(), gauge_validator::foundation::InitError>(())
/// ```
pub struct Field<T, U, V, F>
where
    U: ?Sized,
{
    name: Cow<'static, str>,
    validator: V,
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &U>,
}

impl<T, U, V, F> Field<T, U, V, F>
where
    U: ?Sized,
{
    /// Creates a new field validator.
    pub fn new(name: impl Into<Cow<'static, str>>, validator: V, accessor: F) -> Self {
        Self {
            name: name.into(),
            validator,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Returns the field name.
    pub fn field_name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<T, U, V, F> Clone for Field<T, U, V, F>
where
    V: Clone,
    F: Clone,
    U: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            validator: self.validator.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, U, V, F> std::fmt::Debug for Field<T, U, V, F>
where
    V: std::fmt::Debug,
    U: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("validator", &self.validator)
            .field("accessor", &"<function>")
            .finish()
    }
}

impl<T, U, V, F> Validate for Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let value = (self.accessor)(input);
        self.validator
            .validate(value)
            .map_err(|e| e.with_path_prefix(&self.name))
    }
}

/// Creates a field validator.
pub fn field<T, U, V, F>(name: impl Into<Cow<'static, str>>, validator: V, accessor: F) -> Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    Field::new(name, validator, accessor)
}

// ============================================================================
// TESTS
// ============================================================================
