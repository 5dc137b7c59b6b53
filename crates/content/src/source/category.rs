use serde::Serialize;

use crate::types::ALL_CATEGORIES;

/// One entry of a category tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
}

impl CategoryOption {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }

    /// The `all` pseudo-category with a kind-specific label.
    pub const fn all(label: &'static str) -> Self {
        Self::new(ALL_CATEGORIES, label)
    }
}
