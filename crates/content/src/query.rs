//! Query compilation and matching for content search.
//!
//! This module provides:
//! - Case-insensitive substring matching over title, body, and tags
//! - A compiled matcher combining text and category predicates
//! - Stable ordering by recency or popularity

mod matcher;
mod sort;
mod text_match;

// Re-export public types
pub use matcher::ContentMatcher;
pub use sort::{sort_by_mode, sort_items};
pub use text_match::{fields_match, normalize_search_text, text_matches};
