//! Composable record validators for front-matter tables.
//!
//! A [`Schema`] is a record validator built once from named [`FieldSchema`]
//! primitives and held as an immutable value for the rest of the build.
//! Validation is all-or-nothing per entry and stateless: the same input
//! always gives a structurally identical result, so the external tool may
//! call it concurrently across entries.
//!
//! # Example
//!
//! ```
//! use content_collections::schema::{FieldSchema, Schema};
//! use toml::Value;
//!
//! let schema = Schema::new()
//!     .field("title", FieldSchema::string().non_empty())
//!     .field("draft", FieldSchema::boolean().default_to(Value::Boolean(false)));
//!
//! let entry: toml::Table = toml::from_str(r#"title = "Hello""#).unwrap();
//! let normalized = schema.validate(&entry).unwrap();
//! assert_eq!(normalized["draft"], Value::Boolean(false));
//! ```

mod field;

pub use field::FieldSchema;

use crate::error::ValidationError;
use toml::Table;

/// Record validator: an ordered set of named field validators.
///
/// Fields not declared here are rejected, the same discipline
/// `deny_unknown_fields` applies to typed config structs.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldSchema)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named field validator. Declaration order is kept for
    /// deterministic error reporting.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.push((name.into(), schema));
        self
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate one entry's front-matter table.
    ///
    /// On success returns a normalized copy of the input: defaults are
    /// substituted for absent defaulted fields, optional absent fields stay
    /// absent, and date values get one canonical spelling. The input is
    /// never mutated.
    ///
    /// # Errors
    ///
    /// The first failing field is reported; no partial success exists.
    pub fn validate(&self, entry: &Table) -> Result<Table, ValidationError> {
        for key in entry.keys() {
            if !self.fields.iter().any(|(name, _)| name == key) {
                return Err(ValidationError::UnknownField { field: key.clone() });
            }
        }

        let mut normalized = Table::new();
        for (name, field) in &self.fields {
            match entry.get(name) {
                Some(value) => {
                    field.check(name, value)?;
                    normalized.insert(name.clone(), field.normalized(value));
                }
                None => {
                    if let Some(value) = field.absent(name)? {
                        normalized.insert(name.clone(), value);
                    }
                }
            }
        }
        Ok(normalized)
    }
}
