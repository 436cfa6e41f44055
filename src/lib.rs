//! Front-matter schema registry for static-site content collections.
//!
//! Declares one named collection (`articles`) and the validation schema
//! its entries' front matter must satisfy. The external site-generation
//! tool owns file discovery, front-matter parsing and rendering; this
//! crate only exposes the registry and the validators it points at.
//!
//! # Modules
//!
//! | Module        | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `schema`      | Composable record/field validators             |
//! | `registry`    | Collection definitions, name → definition map  |
//! | `collections` | The declared site schema (`articles`)          |
//! | `meta`        | Typed view of a validated article entry        |
//! | `date`        | Date-coercibility checks                       |
//! | `error`       | Construction and validation errors             |
//!
//! # Example
//!
//! ```
//! use content_collections::{collections, ARTICLES};
//!
//! let registry = collections().unwrap();
//! let articles = registry.get(ARTICLES).unwrap();
//!
//! let entry: toml::Table = toml::from_str(r#"
//!     title = "Binary Search"
//!     description = "Halving the haystack"
//!     pubDate = "2024-01-01"
//!     category = "Algorithms"
//! "#).unwrap();
//!
//! let normalized = articles.validate(&entry).unwrap();
//! assert_eq!(normalized["draft"], toml::Value::Boolean(false));
//! ```

pub mod collections;
pub mod date;
pub mod error;
pub mod meta;
pub mod registry;
pub mod schema;

pub use collections::{ARTICLES, article_schema, collections, parse_article, validate_article};
pub use error::{ConfigError, ValidationError};
pub use meta::{ArticleMeta, Category};
pub use registry::{CollectionDefinition, CollectionRegistry, ContentType};
