//! Content search, filtering, and sorting library.
//!
//! This crate provides the content query engine used by the community,
//! resource library, and booking views:
//! - A generic `ContentItem` record that posts and resources convert into
//! - Case-insensitive text matching and exact category filtering
//! - Stable recency and popularity ordering
//! - Typed content sources (posts, resources) with their category catalogues

pub mod error;
pub mod query;
pub mod search;
pub mod source;
pub mod types;

// Re-export main types
pub use error::{ContentError, Result};
pub use query::ContentMatcher;
pub use search::{query, search, search_records};
pub use source::{
    CategoryOption, Difficulty, Post, PostCategory, Resource, ResourceCategory, ResourceKind,
};
pub use types::{CategoryFilter, ContentItem, QueryParams, QueryResult, SortMode};
