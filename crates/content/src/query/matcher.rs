//! Query matcher for content search.

use crate::types::{CategoryFilter, ContentItem, QueryParams, SortMode};

use super::text_match::{item_text_matches, normalize_search_text};

/// A compiled query matcher.
///
/// The search text is lower-cased once at compile time, so matching a large
/// item list does not re-derive it per item.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    needle: String,
    category: CategoryFilter,
    sort_mode: SortMode,
}

impl ContentMatcher {
    /// Compiles query parameters into a matcher.
    pub fn compile(params: &QueryParams) -> Self {
        Self {
            needle: normalize_search_text(&params.search_text),
            category: params.category.clone(),
            sort_mode: params.sort_mode,
        }
    }

    /// Returns the lower-cased search text.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Returns the term that should be highlighted in results, if any.
    pub fn highlight_term(&self) -> Option<String> {
        (!self.needle.is_empty()).then(|| self.needle.clone())
    }

    /// Text match AND category match.
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.category.matches(&item.category) && item_text_matches(&self.needle, item)
    }
}
