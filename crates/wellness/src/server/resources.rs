//! Resource library endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use content::{Resource, ResourceCategory, SortMode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::library::RELATED_LIMIT;
use crate::server::error::{ApiError, ApiErrorResponse};
use crate::server::query::{CategoriesResponse, ContentQuery};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePayload {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub rating: f64,
    pub difficulty: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Resource> for ResourcePayload {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id.clone(),
            title: resource.title.clone(),
            description: resource.description.clone(),
            kind: resource.kind.as_str().to_string(),
            category: resource.category.as_str().to_string(),
            duration: resource.duration.clone(),
            rating: resource.rating,
            difficulty: resource.difficulty.as_str().to_string(),
            tags: resource.tags.clone(),
            content: resource.content.clone(),
            media_url: resource.media_url.clone(),
            created_at: resource.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesResponse {
    pub resources: Vec<ResourcePayload>,
    pub count: usize,
    pub scanned: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_term: Option<String>,
    pub category: String,
    pub sort: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RelatedResponse {
    pub resources: Vec<ResourcePayload>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RelatedQuery {
    /// Maximum number of resources. Defaults to 3.
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/resources",
    tag = "resources",
    params(ContentQuery),
    responses((status = 200, body = ResourcesResponse))
)]
pub(crate) async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
) -> Json<ResourcesResponse> {
    let result = state
        .library
        .query_resources(&query.to_params(SortMode::Unsorted));
    Json(ResourcesResponse {
        resources: result.items.iter().copied().map(ResourcePayload::from).collect(),
        count: result.count,
        scanned: result.scanned,
        highlight_term: result.highlight_term,
        category: result.category.to_string(),
        sort: result.sort_mode.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/resources/{id}",
    tag = "resources",
    params(("id" = String, Path, description = "Resource id")),
    responses(
        (status = 200, body = ResourcePayload),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn get_resource(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
) -> Result<Json<ResourcePayload>, ApiError> {
    let resource = state.library.get(&resource_id)?;
    state.analytics.record_resource_view(resource.category);
    Ok(Json(resource.into()))
}

#[utoipa::path(
    get,
    path = "/api/resources/{id}/related",
    tag = "resources",
    params(
        ("id" = String, Path, description = "Resource id"),
        RelatedQuery,
    ),
    responses(
        (status = 200, description = "Same category, catalogue order", body = RelatedResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn related(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> Result<Json<RelatedResponse>, ApiError> {
    let limit = query.limit.unwrap_or(RELATED_LIMIT);
    let related = state.library.related(&resource_id, limit)?;
    Ok(Json(RelatedResponse {
        resources: related.into_iter().map(ResourcePayload::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/resources/categories",
    tag = "resources",
    responses((status = 200, body = CategoriesResponse))
)]
pub(crate) async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse::new(ResourceCategory::options()))
}
