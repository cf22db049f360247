//! Error types for validation failures
//!
//! A [`ValidationError`] is the ordinary outcome of a predicate that returned
//! `false`. It is never used for misconfigured constraints; those surface as
//! [`InitError`](super::InitError) when the validator is built.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! do not allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error with a field path, parameters and nested
/// errors.
///
/// # Examples
///
/// ```
/// use gauge_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("byte_size", "must be between 3 and 6 bytes")
///     .with_field("name")
///     .with_param("min", "3")
///     .with_param("max", "6");
///
/// assert_eq!(error.param("max"), Some("6"));
/// assert_eq!(error.to_string(), "name: must be between 3 and 6 bytes (byte_size)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "byte_size", "after", "type_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Optional path of the member that failed.
    ///
    /// Examples: "name", "address.zip", "tags[1]"
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters describing the failure.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested errors, one per failing element or member.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Prepends `prefix` to the field path of this error and every nested
    /// error.
    ///
    /// Index segments join without a dot, so `tags` + `[1]` gives `tags[1]`
    /// while `address` + `zip` gives `address.zip`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path_prefix(mut self, prefix: &str) -> Self {
        self.field = Some(match self.field.take() {
            None => Cow::Owned(prefix.to_owned()),
            Some(field) if prefix.is_empty() => field,
            Some(field) if field.starts_with('[') => Cow::Owned(format!("{prefix}{field}")),
            Some(field) => Cow::Owned(format!("{prefix}.{field}")),
        });
        self.nested = self
            .nested
            .into_iter()
            .map(|nested| nested.with_path_prefix(prefix))
            .collect();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the errors without nested children, i.e. the individual
    /// violations an aggregate error is made of.
    #[must_use]
    pub fn leaves(&self) -> Vec<&ValidationError> {
        if self.nested.is_empty() {
            return vec![self];
        }
        self.nested.iter().flat_map(ValidationError::leaves).collect()
    }

    /// Converts the error to a JSON structure.
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    /// `path: message (code)`, followed by one indented line per violation
    /// when the error aggregates nested failures.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {} ({})", self.message, self.code)?,
            None => write!(f, "{} ({})", self.message, self.code)?,
        }

        if !self.nested.is_empty() {
            for leaf in self.leaves() {
                write!(f, "\n  - {leaf}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error for a member whose type the
    /// constraint does not support.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        Self::new("type_mismatch", format!("Expected {expected}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, typically one per failing member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns every individual violation across all collected errors.
    #[must_use]
    pub fn violations(&self) -> Vec<&ValidationError> {
        self.errors.iter().flat_map(ValidationError::leaves).collect()
    }

    /// JSON array with one entry per violation, in the shape of
    /// [`ValidationError::to_json_value`].
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.violations()
                .into_iter()
                .map(ValidationError::to_json_value)
                .collect(),
        )
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let violations = self.violations();
        write!(f, "{} constraint violation(s)", violations.len())?;
        for violation in violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_error_has_no_path() {
        let error = ValidationError::new("byte_size", "Too long");
        assert_eq!(error.code, "byte_size");
        assert_eq!(error.message, "Too long");
        assert!(error.field.is_none());
    }

    #[test]
    fn params_lookup() {
        let error = ValidationError::new("byte_size", "out of range")
            .with_param("min", "3")
            .with_param("actual", "2");

        assert_eq!(error.param("min"), Some("3"));
        assert_eq!(error.param("actual"), Some("2"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn path_prefix_joins_segments() {
        let indexed = ValidationError::new("x", "x").with_field("[0]");
        assert_eq!(indexed.with_path_prefix("tags").field.as_deref(), Some("tags[0]"));

        let named = ValidationError::new("x", "x").with_field("zip");
        assert_eq!(named.with_path_prefix("address").field.as_deref(), Some("address.zip"));

        let bare = ValidationError::new("x", "x");
        assert_eq!(bare.with_path_prefix("name").field.as_deref(), Some("name"));
    }

    #[test]
    fn path_prefix_reaches_nested() {
        let error = ValidationError::new("each_failed", "failed")
            .with_nested_error(ValidationError::new("byte_size", "x").with_field("[1]"))
            .with_path_prefix("list");

        assert_eq!(error.field.as_deref(), Some("list"));
        assert_eq!(error.nested[0].field.as_deref(), Some("list[1]"));
    }

    #[test]
    fn leaves_skip_aggregates() {
        let error = ValidationError::new("each_failed", "1 of 2 elements failed").with_nested_error(
            ValidationError::new("each_failed", "1 of 1 elements failed")
                .with_nested_error(ValidationError::new("byte_size", "too long").with_field("[0]")),
        );

        let leaves = error.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].code, "byte_size");
    }

    #[test]
    fn display_lists_violations() {
        let error = ValidationError::new("each_failed", "2 of 3 elements failed")
            .with_nested_error(ValidationError::new("byte_size", "too long").with_field("[0]"))
            .with_nested_error(ValidationError::new("byte_size", "too short").with_field("[2]"))
            .with_path_prefix("tags");

        assert_eq!(
            error.to_string(),
            "tags: 2 of 3 elements failed (each_failed)\n  - tags[0]: too long (byte_size)\n  - tags[2]: too short (byte_size)"
        );

        let errors: ValidationErrors = std::iter::once(error).collect();
        assert!(errors.to_string().starts_with("2 constraint violation(s)\n  - tags[0]"));
    }

    #[test]
    fn collection_into_result() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.add(ValidationError::new("after", "first"));
        errors.add(ValidationError::new("before", "second"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.violations().len(), 2);
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn static_strings_do_not_allocate() {
        let error = ValidationError::new("byte_size", "static message");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn json_value_shape() {
        let value = ValidationError::new("before", "must be before 2020-01-01")
            .with_field("deadline")
            .with_param("date", "2020-01-01")
            .to_json_value();

        assert_eq!(value["code"], "before");
        assert_eq!(value["field"], "deadline");
        assert_eq!(value["params"]["date"], "2020-01-01");
    }
}
