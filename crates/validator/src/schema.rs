//! Declarative constraint schemas for JSON documents.
//!
//! A schema maps member names to constraint declarations. Compiling it
//! builds every validator once, so a bad declaration is reported before any
//! document is checked. Compiled schemas evaluate `serde_json::Value`
//! documents:
//!
//! - a missing member or `null` is valid
//! - a string is evaluated by each constraint
//! - an array has each element evaluated, failures keep their index
//! - any other JSON type is a `type_mismatch`
//!
//! ```
//! use gauge_validator::schema::ConstraintSchema;
//! use serde_json::json;
//!
//! let schema = ConstraintSchema::from_json_str(r#"{
//!     "name": [{ "constraint": "byte_size", "min": 3, "max": 6 }],
//!     "tags": [{ "constraint": "byte_size", "max": 4, "encoding": "shift_jis" }]
//! }"#)?.compile()?;
//!
//! assert!(schema.validate(&json!({ "name": "ああ", "tags": ["ああ"] })).is_ok());
//!
//! let errors = schema.validate(&json!({ "name": "aa", "tags": ["あ", "あああ"] })).unwrap_err();
//! let paths: Vec<_> = errors.violations().iter().filter_map(|e| e.field.as_deref()).collect();
//! assert_eq!(paths, ["name", "tags[1]"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::foundation::{InitError, Validate, ValidationError, ValidationErrors};
use crate::validators::{
    AFTER, After, BEFORE, BYTE_SIZE, Before, ByteSize, ByteSizeParams, Instant, TemporalParams,
};
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

type Timestamp = DateTime<FixedOffset>;

// ============================================================================
// DECLARATIONS
// ============================================================================

/// One declared constraint, tagged by its `constraint` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "constraint", rename_all = "snake_case")]
pub enum ConstraintDef {
    /// `{"constraint": "byte_size", "min": .., "max": .., "encoding": ..}`
    ByteSize(ByteSizeParams),
    /// `{"constraint": "after", "date": .., "format": ..}`
    After(TemporalParams),
    /// `{"constraint": "before", "date": .., "format": ..}`
    Before(TemporalParams),
}

impl ConstraintDef {
    /// The constraint's name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ByteSize(_) => BYTE_SIZE,
            Self::After(_) => AFTER,
            Self::Before(_) => BEFORE,
        }
    }

    /// Builds the validator for this declaration.
    pub fn compile(&self) -> Result<CompiledConstraint, InitError> {
        Ok(match self {
            Self::ByteSize(params) => CompiledConstraint::ByteSize(ByteSize::from_params(params)?),
            Self::After(params) => CompiledConstraint::After {
                validator: After::from_params(params)?,
                format: params.format.clone(),
            },
            Self::Before(params) => CompiledConstraint::Before {
                validator: Before::from_params(params)?,
                format: params.format.clone(),
            },
        })
    }
}

/// Constraint declarations keyed by member name.
///
/// Names starting with `/` are JSON pointers (`/address/zip`); anything
/// else is a top-level object key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ConstraintSchema {
    fields: IndexMap<String, Vec<ConstraintDef>>,
}

impl ConstraintSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a schema from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds a constraint to a member.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, constraint: ConstraintDef) -> Self {
        self.fields.entry(field.into()).or_default().push(constraint);
        self
    }

    /// Number of members with declared constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds every declared validator, failing on the first bad
    /// declaration. The error records the member it was declared on.
    pub fn compile(&self) -> Result<CompiledSchema, InitError> {
        let fields = self
            .fields
            .iter()
            .map(|(name, defs)| {
                let constraints = defs
                    .iter()
                    .map(ConstraintDef::compile)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| e.with_field(name.clone()))?;
                Ok((name.clone(), constraints))
            })
            .collect::<Result<Vec<_>, InitError>>()?;

        tracing::debug!(fields = fields.len(), "compiled constraint schema");
        Ok(CompiledSchema { fields })
    }
}

// ============================================================================
// COMPILED
// ============================================================================

/// A built constraint that evaluates JSON members.
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledConstraint {
    /// Byte-size bound on string members.
    ByteSize(ByteSize),
    /// Members must be after a boundary; parsed with `format` when given.
    After {
        /// The built validator.
        validator: After<Timestamp>,
        /// Pattern string members are parsed with.
        format: Option<String>,
    },
    /// Members must be before a boundary; parsed with `format` when given.
    Before {
        /// The built validator.
        validator: Before<Timestamp>,
        /// Pattern string members are parsed with.
        format: Option<String>,
    },
}

impl CompiledConstraint {
    fn validate_text(&self, text: &str) -> Result<(), ValidationError> {
        match self {
            Self::ByteSize(validator) => validator.validate(text),
            Self::After { validator, format } => validator.validate(&parse_member(text, format)?),
            Self::Before { validator, format } => validator.validate(&parse_member(text, format)?),
        }
    }

    fn validate_scalar(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Null => Ok(()),
            Value::String(text) => self.validate_text(text),
            other => Err(ValidationError::type_mismatch("string", json_type(other))),
        }
    }
}

impl Validate for CompiledConstraint {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input {
            Value::Array(items) => crate::combinators::each::<_, Value>(Scalar(self)).validate(items),
            other => self.validate_scalar(other),
        }
    }
}

/// Adapts a constraint to single (non-array) JSON values.
struct Scalar<'a>(&'a CompiledConstraint);

impl Validate for Scalar<'_> {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        self.0.validate_scalar(input)
    }
}

fn parse_member(text: &str, format: &Option<String>) -> Result<Timestamp, ValidationError> {
    Timestamp::parse_boundary(text, format.as_deref()).map_err(|e| {
        ValidationError::invalid_format(format.clone().unwrap_or_else(|| "ISO-8601".to_owned()))
            .with_param("reason", e.to_string())
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A schema whose validators are all built.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSchema {
    fields: Vec<(String, Vec<CompiledConstraint>)>,
}

impl CompiledSchema {
    /// Evaluates every declared constraint against `document`, collecting
    /// all failures. Each error's field path starts with the member name.
    pub fn validate(&self, document: &Value) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (name, constraints) in &self.fields {
            let member = if name.starts_with('/') {
                document.pointer(name)
            } else {
                document.get(name)
            };
            let Some(member) = member else { continue };

            for constraint in constraints {
                if let Err(e) = constraint.validate(member) {
                    errors.add(e.with_path_prefix(name));
                }
            }
        }

        errors.into_result(())
    }

    /// Evaluates `document` and renders the outcome as a JSON report:
    /// `{"valid": bool, "violations": [{"code", "message", "field", "params", ..}]}`.
    pub fn report(&self, document: &Value) -> Value {
        match self.validate(document) {
            Ok(()) => serde_json::json!({ "valid": true, "violations": [] }),
            Err(errors) => serde_json::json!({
                "valid": false,
                "violations": errors.to_json_value(),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
