//! Error types for registry construction and entry validation.

use thiserror::Error;

/// Registry construction errors.
///
/// Fatal at build start: surfaced directly to the operator, never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported content type `{0}` (expected `content` or `data`)")]
    UnsupportedContentType(String),

    #[error("collection `{0}` is defined twice")]
    DuplicateCollection(String),
}

/// Per-entry validation errors.
///
/// Each variant carries the field name, the expected constraint and the
/// offending value, so the build tool can report a failing entry without
/// re-inspecting the front matter. One bad entry failing is the caller's
/// policy; this crate only reports.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}`: expected {expected}, got `{actual}`")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: String,
    },

    #[error("field `{field}` must not be empty")]
    EmptyString { field: String },

    #[error("field `{field}`: `{actual}` is not a valid date (expected `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`)")]
    InvalidDate { field: String, actual: String },

    #[error("field `{field}`: `{actual}` is not one of {allowed:?}")]
    NotInEnum {
        field: String,
        actual: String,
        allowed: Vec<String>,
    },

    #[error("unknown field `{field}`")]
    UnknownField { field: String },
}
