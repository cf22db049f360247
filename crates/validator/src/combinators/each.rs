//! EACH combinator - applies one constraint to every element of a slice

use crate::foundation::{Validate, ValidationError};
use std::borrow::Borrow;
use std::marker::PhantomData;

/// Code of the aggregate error raised when elements fail.
pub const EACH_FAILED: &str = "each_failed";

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a slice independently.
///
/// Every failing element contributes one nested error whose field path is
/// its index (`[0]`, `[3]`, ...), so reported locations map one-to-one to
/// failing positions. Wrap in [`Field`](super::Field) to get `name[i]`.
///
/// # Examples
///
/// ```
/// use gauge_validator::prelude::*;
///
/// let validator = ByteSize::new(3, 6, None)?.each::<String>();
/// let list = vec!["aa".to_string(), "あ".to_string(), "ああa".to_string()];
///
/// let error = validator.validate(&list[..]).unwrap_err();
/// let paths: Vec<_> = error.nested.iter().filter_map(|e| e.field.as_deref()).collect();
/// assert_eq!(paths, ["[0]", "[2]"]);
/// # Ok::<(), gauge_validator::foundation::InitError>(())
/// ```
pub struct Each<V, E> {
    inner: V,
    fail_fast: bool,
    _element: PhantomData<fn(&E)>,
}

impl<V, E> Each<V, E> {
    /// Creates a new EACH combinator that collects all element failures.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            fail_fast: false,
            _element: PhantomData,
        }
    }

    /// Creates an EACH combinator that stops on the first failing element.
    pub fn fail_fast(inner: V) -> Self {
        Self {
            inner,
            fail_fast: true,
            _element: PhantomData,
        }
    }

    /// Sets whether to stop on first error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Clone, E> Clone for Each<V, E> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone()).with_fail_fast(self.fail_fast)
    }
}

impl<V: std::fmt::Debug, E> std::fmt::Debug for Each<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Each")
            .field("inner", &self.inner)
            .field("fail_fast", &self.fail_fast)
            .finish()
    }
}

impl<V, E> Validate for Each<V, E>
where
    V: Validate,
    E: Borrow<V::Input>,
{
    type Input = [E];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let failures = input.iter().enumerate().filter_map(|(index, element)| {
            self.inner
                .validate(element.borrow())
                .err()
                .map(|e| (index, e.with_path_prefix(&format!("[{index}]"))))
        });

        let failures: Vec<(usize, ValidationError)> = if self.fail_fast {
            failures.take(1).collect()
        } else {
            failures.collect()
        };
        if failures.is_empty() {
            return Ok(());
        }

        let indices = failures
            .iter()
            .map(|(index, _)| index.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let message = if self.fail_fast {
            format!("element [{indices}] failed")
        } else {
            format!("{} of {} elements failed", failures.len(), input.len())
        };

        let aggregate = ValidationError::new(EACH_FAILED, message)
            .with_param("failed_count", failures.len().to_string())
            .with_param("total_count", input.len().to_string())
            .with_param("failed_indices", indices);

        Err(failures
            .into_iter()
            .fold(aggregate, |aggregate, (_, e)| aggregate.with_nested_error(e)))
    }
}

/// Creates an EACH combinator that validates all elements.
pub fn each<V, E>(validator: V) -> Each<V, E> {
    Each::new(validator)
}

/// Creates an EACH combinator that stops on first error.
pub fn each_fail_fast<V, E>(validator: V) -> Each<V, E> {
    Each::fail_fast(validator)
}

// ============================================================================
// TESTS
// ============================================================================
