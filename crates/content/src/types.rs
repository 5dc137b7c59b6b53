//! Core content and query types.
//!
//! Posts and resources are converted into `ContentItem` before they reach the
//! query engine. The wellness crate converts results into API payload types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire value of the category filter that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A tagged content record (post or resource) subject to search, filter, and sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: String,
    /// Insertion order, duplicates kept.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Computed by the content source; never touched by the engine.
    pub popularity_score: f64,
}

/// Category constraint for a query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    /// Exact, case-sensitive comparison. `All` accepts every category.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final ordering of a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest `created_at` first.
    #[default]
    Recent,
    /// Highest `popularity_score` first.
    Popular,
    /// Input order. Any unrecognized sort value lands here.
    #[serde(other)]
    Unsorted,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::Unsorted => "unsorted",
        }
    }
}

impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match value {
            "recent" => Self::Recent,
            "popular" => Self::Popular,
            _ => Self::Unsorted,
        })
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for one query invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    /// Case-insensitive substring; empty matches everything.
    pub search_text: String,
    pub category: CategoryFilter,
    pub sort_mode: SortMode,
}

impl QueryParams {
    pub fn new(
        search_text: impl Into<String>,
        category: impl Into<CategoryFilter>,
        sort_mode: SortMode,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            category: category.into(),
            sort_mode,
        }
    }
}

/// Query results with bookkeeping for API consumers.
///
/// `T` is `ContentItem` for plain queries, or a reference to the caller's own
/// record type when querying typed sources.
#[derive(Debug, Clone)]
pub struct QueryResult<T = ContentItem> {
    /// Matching items in final order.
    pub items: Vec<T>,
    /// Number of matching items.
    pub count: usize,
    /// Number of items examined.
    pub scanned: usize,
    /// Lower-cased search text to highlight, if any.
    pub highlight_term: Option<String>,
    pub category: CategoryFilter,
    pub sort_mode: SortMode,
}
