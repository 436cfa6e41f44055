//! Typed view of a validated article entry.
//!
//! `ArticleMeta` is what the build pipeline holds for each accepted entry:
//! created once when the external tool parses an entry's front matter,
//! validated against the articles schema, then read-only until the
//! renderer consumes it.

use crate::date::DateTimeUtc;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml::Table;

/// The closed category set. Additions are schema edits, not runtime
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Data Structures")]
    DataStructures,
    Algorithms,
    Common,
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "AI")]
    Ai,
}

impl Category {
    /// Front-matter spellings, in declaration order.
    pub const ALL: [&'static str; 5] =
        ["Data Structures", "Algorithms", "Common", "iOS", "AI"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataStructures => "Data Structures",
            Self::Algorithms => "Algorithms",
            Self::Common => "Common",
            Self::Ios => "iOS",
            Self::Ai => "AI",
        }
    }
}

/// Metadata of one article entry, immutable once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleMeta {
    pub title: String,

    pub description: String,

    /// Publication date, canonical string spelling (`YYYY-MM-DD` or
    /// `YYYY-MM-DDTHH:MM:SSZ`).
    #[serde(rename = "pubDate")]
    pub pub_date: String,

    pub category: Category,

    /// Stays `None` when the entry declares no tags; never auto-populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub draft: bool,
}

impl ArticleMeta {
    /// Typed view of a table already normalized by the articles schema.
    pub fn from_normalized(table: Table) -> Result<Self> {
        toml::Value::Table(table)
            .try_into()
            .context("normalized entry does not match the articles shape")
    }

    /// Publication date as a calendar value.
    pub fn date(&self) -> Option<DateTimeUtc> {
        DateTimeUtc::parse(&self.pub_date)
    }
}
