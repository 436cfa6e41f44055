//! Primitive field validators and their modifiers.
//!
//! A [`FieldSchema`] is built by chaining: pick a primitive constructor,
//! then apply modifiers.
//!
//! | Constructor | Accepts |
//! |---|---|
//! | `string()` | TOML string |
//! | `date()` | `YYYY-MM-DD` / RFC 3339 `Z` string, or native TOML datetime |
//! | `boolean()` | TOML boolean |
//! | `string_array()` | TOML array whose elements are all strings |
//! | `one_of(set)` | TOML string that is a member of `set` |
//!
//! | Modifier | Effect when the field is absent |
//! |---|---|
//! | (none) | `MissingField` error |
//! | `optional()` | field stays absent |
//! | `default_to(v)` | `v` is substituted |

use crate::{date::DateTimeUtc, error::ValidationError};
use toml::Value;

/// What a single field accepts.
#[derive(Debug, Clone)]
enum FieldKind {
    String { non_empty: bool },
    Date,
    Bool,
    StringArray,
    Enum(&'static [&'static str]),
}

/// Validator for one named field of a record.
///
/// Immutable once composed into a [`Schema`](super::Schema).
#[derive(Debug, Clone)]
pub struct FieldSchema {
    kind: FieldKind,
    required: bool,
    default: Option<Value>,
}

impl FieldSchema {
    const fn with_kind(kind: FieldKind) -> Self {
        Self {
            kind,
            required: true,
            default: None,
        }
    }

    /// Any string.
    pub const fn string() -> Self {
        Self::with_kind(FieldKind::String { non_empty: false })
    }

    /// A date-coercible value, see [`DateTimeUtc::parse`].
    pub const fn date() -> Self {
        Self::with_kind(FieldKind::Date)
    }

    pub const fn boolean() -> Self {
        Self::with_kind(FieldKind::Bool)
    }

    /// An array whose elements are all strings.
    pub const fn string_array() -> Self {
        Self::with_kind(FieldKind::StringArray)
    }

    /// A string drawn from a fixed, closed set.
    pub const fn one_of(allowed: &'static [&'static str]) -> Self {
        Self::with_kind(FieldKind::Enum(allowed))
    }

    /// Reject empty (or whitespace-only) strings. Only meaningful after
    /// [`string()`](Self::string); a no-op for other kinds.
    pub fn non_empty(mut self) -> Self {
        if let FieldKind::String { .. } = self.kind {
            self.kind = FieldKind::String { non_empty: true };
        }
        self
    }

    /// Absent field is fine; it stays absent (never auto-populated).
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Absent field is substituted with `value`. Implies optional.
    pub fn default_to(mut self, value: Value) -> Self {
        self.required = false;
        self.default = Some(value);
        self
    }

    /// Check a present value against this field's kind.
    pub(crate) fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        match &self.kind {
            FieldKind::String { non_empty } => match value {
                Value::String(s) => {
                    if *non_empty && s.trim().is_empty() {
                        return Err(ValidationError::EmptyString {
                            field: field.to_string(),
                        });
                    }
                    Ok(())
                }
                other => Err(mismatch(field, "a string", other)),
            },
            FieldKind::Date => match value {
                Value::String(s) => {
                    if DateTimeUtc::parse(s).is_some() {
                        Ok(())
                    } else {
                        Err(ValidationError::InvalidDate {
                            field: field.to_string(),
                            actual: s.clone(),
                        })
                    }
                }
                // Native TOML datetimes qualify as long as they carry a date part.
                Value::Datetime(dt) if dt.date.is_some() => Ok(()),
                Value::Datetime(dt) => Err(ValidationError::InvalidDate {
                    field: field.to_string(),
                    actual: dt.to_string(),
                }),
                other => Err(mismatch(field, "a date", other)),
            },
            FieldKind::Bool => match value {
                Value::Boolean(_) => Ok(()),
                other => Err(mismatch(field, "a boolean", other)),
            },
            FieldKind::StringArray => match value {
                Value::Array(items) => {
                    for item in items {
                        if item.as_str().is_none() {
                            return Err(mismatch(field, "an array of strings", value));
                        }
                    }
                    Ok(())
                }
                other => Err(mismatch(field, "an array of strings", other)),
            },
            FieldKind::Enum(allowed) => match value {
                Value::String(s) if allowed.contains(&s.as_str()) => Ok(()),
                Value::String(s) => Err(ValidationError::NotInEnum {
                    field: field.to_string(),
                    actual: s.clone(),
                    allowed: allowed.iter().map(ToString::to_string).collect(),
                }),
                other => Err(mismatch(field, "a string", other)),
            },
        }
    }

    /// Canonical form of a checked value.
    ///
    /// Native TOML datetimes are rewritten to their string spelling so
    /// downstream consumers see one representation for dates.
    pub(crate) fn normalized(&self, value: &Value) -> Value {
        match (&self.kind, value) {
            (FieldKind::Date, Value::Datetime(dt)) => Value::String(dt.to_string()),
            _ => value.clone(),
        }
    }

    /// Resolve an absent field: default, skip, or error.
    pub(crate) fn absent(&self, field: &str) -> Result<Option<Value>, ValidationError> {
        if let Some(value) = &self.default {
            Ok(Some(value.clone()))
        } else if self.required {
            Err(ValidationError::MissingField {
                field: field.to_string(),
            })
        } else {
            Ok(None)
        }
    }
}

fn mismatch(field: &str, expected: &'static str, actual: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        field: field.to_string(),
        expected,
        actual: actual.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_accepts_any_string() {
        let field = FieldSchema::string();
        assert!(field.check("title", &Value::String("hello".into())).is_ok());
        assert!(field.check("title", &Value::String(String::new())).is_ok());
    }

    #[test]
    fn test_non_empty_rejects_blank() {
        let field = FieldSchema::string().non_empty();
        assert_eq!(
            field.check("title", &Value::String(String::new())),
            Err(ValidationError::EmptyString {
                field: "title".to_string()
            })
        );
        assert!(field.check("title", &Value::String("   ".into())).is_err());
        assert!(field.check("title", &Value::String("ok".into())).is_ok());
    }

    #[test]
    fn test_string_rejects_other_types() {
        let field = FieldSchema::string();
        let err = field.check("title", &Value::Integer(42)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TypeMismatch {
                expected: "a string",
                ..
            }
        ));
    }

    #[test]
    fn test_date_accepts_parseable_strings() {
        let field = FieldSchema::date();
        assert!(
            field
                .check("pubDate", &Value::String("2024-01-01".into()))
                .is_ok()
        );
        assert!(
            field
                .check("pubDate", &Value::String("2024-01-01T08:00:00Z".into()))
                .is_ok()
        );
        assert!(
            field
                .check("pubDate", &Value::String("yesterday".into()))
                .is_err()
        );
    }

    #[test]
    fn test_date_accepts_native_datetime() {
        let table: toml::Table = toml::from_str("pubDate = 2024-01-01").unwrap();
        let field = FieldSchema::date();
        assert!(field.check("pubDate", &table["pubDate"]).is_ok());

        // Normalization rewrites the datetime to its string spelling.
        let normalized = field.normalized(&table["pubDate"]);
        assert_eq!(normalized, Value::String("2024-01-01".to_string()));
    }

    #[test]
    fn test_date_rejects_time_only_datetime() {
        let table: toml::Table = toml::from_str("pubDate = 08:00:00").unwrap();
        let field = FieldSchema::date();
        assert!(matches!(
            field.check("pubDate", &table["pubDate"]),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_boolean() {
        let field = FieldSchema::boolean();
        assert!(field.check("draft", &Value::Boolean(true)).is_ok());
        assert!(field.check("draft", &Value::String("true".into())).is_err());
    }

    #[test]
    fn test_string_array() {
        let field = FieldSchema::string_array();
        let ok = Value::Array(vec![
            Value::String("a".into()),
            Value::String("b".into()),
        ]);
        assert!(field.check("tags", &ok).is_ok());
        assert!(field.check("tags", &Value::Array(vec![])).is_ok());

        let mixed = Value::Array(vec![Value::String("a".into()), Value::Integer(1)]);
        assert!(field.check("tags", &mixed).is_err());
        assert!(field.check("tags", &Value::String("a".into())).is_err());
    }

    #[test]
    fn test_one_of_membership() {
        const SET: &[&str] = &["Algorithms", "AI"];
        let field = FieldSchema::one_of(SET);
        assert!(
            field
                .check("category", &Value::String("AI".into()))
                .is_ok()
        );

        let err = field
            .check("category", &Value::String("Quantum".into()))
            .unwrap_err();
        match err {
            ValidationError::NotInEnum {
                actual, allowed, ..
            } => {
                assert_eq!(actual, "Quantum");
                assert_eq!(allowed, vec!["Algorithms", "AI"]);
            }
            other => panic!("expected NotInEnum, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_resolution() {
        let required = FieldSchema::string();
        assert!(required.absent("title").is_err());

        let optional = FieldSchema::string_array().optional();
        assert_eq!(optional.absent("tags"), Ok(None));

        let defaulted = FieldSchema::boolean().default_to(Value::Boolean(false));
        assert_eq!(defaulted.absent("draft"), Ok(Some(Value::Boolean(false))));
    }
}
