//! Collection definitions and the name → definition registry.
//!
//! Built once at process start, read-only afterwards. The external build
//! tool queries the registry at build start (and again on every watch-mode
//! rebuild) to discover which on-disk collections exist and how to
//! validate their entries.

use crate::{
    error::{ConfigError, ValidationError},
    schema::Schema,
};
use std::{collections::BTreeMap, str::FromStr};
use toml::Table;

/// How a collection's entries are sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Freeform content files with front matter.
    Content,
    /// Structured data files, no body.
    Data,
}

impl ContentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Data => "data",
        }
    }
}

impl FromStr for ContentType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(Self::Content),
            "data" => Ok(Self::Data),
            other => Err(ConfigError::UnsupportedContentType(other.to_string())),
        }
    }
}

/// One collection: a content type plus the schema its entries must satisfy.
///
/// Opaque and immutable once defined. Definition never validates data; it
/// only captures the schema for later use.
#[derive(Debug, Clone)]
pub struct CollectionDefinition {
    content_type: ContentType,
    schema: Schema,
}

impl CollectionDefinition {
    pub fn new(content_type: ContentType, schema: Schema) -> Self {
        Self {
            content_type,
            schema,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate one entry against this collection's schema.
    pub fn validate(&self, entry: &Table) -> Result<Table, ValidationError> {
        self.schema.validate(entry)
    }
}

/// Mapping from collection name to its definition. Keys are unique.
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    collections: BTreeMap<String, CollectionDefinition>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection under `name`.
    ///
    /// # Errors
    ///
    /// Defining the same name twice is a construction-time error; the
    /// build cannot proceed.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        definition: CollectionDefinition,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if self.collections.contains_key(&name) {
            return Err(ConfigError::DuplicateCollection(name));
        }
        self.collections.insert(name, definition);
        Ok(())
    }

    /// Look up a collection by name.
    pub fn get(&self, name: &str) -> Option<&CollectionDefinition> {
        self.collections.get(name)
    }

    /// Registered collection names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSchema;

    fn definition() -> CollectionDefinition {
        CollectionDefinition::new(
            ContentType::Content,
            Schema::new().field("title", FieldSchema::string()),
        )
    }

    #[test]
    fn test_content_type_from_str() {
        assert_eq!("content".parse(), Ok(ContentType::Content));
        assert_eq!("data".parse(), Ok(ContentType::Data));
        assert_eq!(
            "yaml".parse::<ContentType>(),
            Err(ConfigError::UnsupportedContentType("yaml".to_string()))
        );
    }

    #[test]
    fn test_content_type_round_trip() {
        for ty in [ContentType::Content, ContentType::Data] {
            assert_eq!(ty.as_str().parse(), Ok(ty));
        }
    }

    #[test]
    fn test_definition_is_opaque_but_queryable() {
        let def = definition();
        assert_eq!(def.content_type(), ContentType::Content);
        assert_eq!(def.schema().len(), 1);
    }

    #[test]
    fn test_registry_define_and_get() {
        let mut registry = CollectionRegistry::new();
        registry.define("articles", definition()).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.get("articles").is_some());
        assert!(registry.get("pages").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["articles"]);
    }

    #[test]
    fn test_registry_rejects_duplicate_name() {
        let mut registry = CollectionRegistry::new();
        registry.define("articles", definition()).unwrap();

        assert_eq!(
            registry.define("articles", definition()),
            Err(ConfigError::DuplicateCollection("articles".to_string()))
        );
        // The first definition survives.
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_definition_validate_delegates() {
        let def = definition();
        let entry: Table = toml::from_str(r#"title = "Hello""#).unwrap();
        assert!(def.validate(&entry).is_ok());

        let bad: Table = toml::from_str("title = 1").unwrap();
        assert!(def.validate(&bad).is_err());
    }
}
