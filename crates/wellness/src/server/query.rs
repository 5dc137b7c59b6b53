//! Query-string handling shared by the content listing endpoints.

use content::{CategoryFilter, CategoryOption, QueryParams, SortMode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ContentQuery {
    /// Case-insensitive search text.
    pub q: Option<String>,
    /// Category id, or `all`. Defaults to `all`.
    pub category: Option<String>,
    /// `recent` or `popular`; anything else keeps catalogue order. The
    /// default depends on the endpoint.
    pub sort: Option<String>,
}

impl ContentQuery {
    /// `default_sort` applies only when no `sort` was given.
    pub(crate) fn to_params(&self, default_sort: SortMode) -> QueryParams {
        let category = self
            .category
            .as_deref()
            .map(CategoryFilter::from)
            .unwrap_or_default();
        let sort_mode = self
            .sort
            .as_deref()
            .map(|raw| raw.parse::<SortMode>().unwrap_or(SortMode::Unsorted))
            .unwrap_or(default_sort);
        QueryParams::new(self.q.clone().unwrap_or_default(), category, sort_mode)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryOptionPayload {
    pub id: String,
    pub label: String,
}

impl From<CategoryOption> for CategoryOptionPayload {
    fn from(option: CategoryOption) -> Self {
        Self {
            id: option.id.to_string(),
            label: option.label.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryOptionPayload>,
}

impl CategoriesResponse {
    pub(crate) fn new(options: Vec<CategoryOption>) -> Self {
        Self {
            categories: options.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_and_endpoint_sort() {
        let params = ContentQuery::default().to_params(SortMode::Recent);
        assert_eq!(params, QueryParams::new("", "all", SortMode::Recent));

        let params = ContentQuery::default().to_params(SortMode::Unsorted);
        assert_eq!(params, QueryParams::new("", "all", SortMode::Unsorted));
    }

    #[test]
    fn explicit_sort_overrides_default() {
        let params = ContentQuery {
            sort: Some("popular".to_string()),
            ..ContentQuery::default()
        }
        .to_params(SortMode::Unsorted);
        assert_eq!(params.sort_mode, SortMode::Popular);
    }

    #[test]
    fn unknown_sort_keeps_order() {
        let params = ContentQuery {
            q: Some("sleep".to_string()),
            category: Some("advice".to_string()),
            sort: Some("alphabetical".to_string()),
        }
        .to_params(SortMode::Recent);
        assert_eq!(params.search_text, "sleep");
        assert_eq!(params.category, CategoryFilter::only("advice"));
        assert_eq!(params.sort_mode, SortMode::Unsorted);
    }
}
