//! OPTIONAL combinator - absence is always valid

use crate::foundation::{Validate, ValidationError};
use std::borrow::Borrow;
use std::marker::PhantomData;

/// Makes a validator accept `None`.
///
/// `E` is the owned type held in the `Option`; it only needs to borrow as
/// the inner validator's input, so a `str` validator checks `Option<String>`.
pub struct Optional<V, E> {
    pub(crate) inner: V,
    _element: PhantomData<fn(&E)>,
}

impl<V, E> Optional<V, E> {
    /// Wraps `inner` so that `None` passes.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _element: PhantomData,
        }
    }

    /// Returns a reference to the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Unwraps the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Clone, E> Clone for Optional<V, E> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<V: std::fmt::Debug, E> std::fmt::Debug for Optional<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optional").field("inner", &self.inner).finish()
    }
}

impl<V, E> Validate for Optional<V, E>
where
    V: Validate,
    E: Borrow<V::Input>,
{
    type Input = Option<E>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value.borrow()),
        }
    }
}

/// Creates an OPTIONAL combinator.
pub fn optional<V, E>(validator: V) -> Optional<V, E> {
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinBytes {
        min: usize,
    }

    impl Validate for MinBytes {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() >= self.min {
                Ok(())
            } else {
                Err(ValidationError::new("min_bytes", "too short"))
            }
        }
    }

    #[test]
    fn test_optional_none() {
        let validator = optional::<_, String>(MinBytes { min: 5 });
        assert!(validator.validate(&None).is_ok());
    }

    #[test]
    fn test_optional_some() {
        let validator = optional::<_, String>(MinBytes { min: 3 });
        assert!(validator.validate(&Some("あ".to_string())).is_ok());
        assert!(validator.validate(&Some("hi".to_string())).is_err());
    }

    #[test]
    fn test_optional_borrowed_elements() {
        let validator = optional::<_, &str>(MinBytes { min: 3 });
        assert!(validator.validate(&Some("abc")).is_ok());
        assert!(validator.validate(&Some("ab")).is_err());
    }
}
