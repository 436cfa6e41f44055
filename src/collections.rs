//! The site's declared collections.
//!
//! One collection today: `articles`, freeform content files whose front
//! matter must satisfy [`article_schema`]. The external build tool reads
//! the registry returned by [`collections`] once per build pass.

use crate::{
    error::{ConfigError, ValidationError},
    meta::{ArticleMeta, Category},
    registry::{CollectionDefinition, CollectionRegistry, ContentType},
    schema::{FieldSchema, Schema},
};
use anyhow::Result;
use toml::{Table, Value};

/// Name of the articles collection.
pub const ARTICLES: &str = "articles";

/// Front-matter schema for one article entry.
pub fn article_schema() -> Schema {
    Schema::new()
        .field("title", FieldSchema::string().non_empty())
        .field("description", FieldSchema::string().non_empty())
        .field("pubDate", FieldSchema::date())
        .field("category", FieldSchema::one_of(&Category::ALL))
        .field("tags", FieldSchema::string_array().optional())
        .field("draft", FieldSchema::boolean().default_to(Value::Boolean(false)))
}

/// Build the collection registry: `{"articles": <definition>}`.
///
/// Constructed once at process start; read-only for the lifetime of the
/// build.
pub fn collections() -> Result<CollectionRegistry, ConfigError> {
    let mut registry = CollectionRegistry::new();
    registry.define(
        ARTICLES,
        CollectionDefinition::new(ContentType::Content, article_schema()),
    )?;
    Ok(registry)
}

/// Validate one article entry and return its typed metadata.
pub fn parse_article(entry: &Table) -> Result<ArticleMeta> {
    let normalized = article_schema().validate(entry)?;
    ArticleMeta::from_normalized(normalized)
}

/// Validate one article entry, keeping the normalized table form.
pub fn validate_article(entry: &Table) -> Result<Table, ValidationError> {
    article_schema().validate(entry)
}
