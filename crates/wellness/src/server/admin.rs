//! Admin dashboard endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::analytics::{AlertCounts, CategoryViews, CrisisAlert, Overview};
use crate::server::error::{ApiError, ApiErrorResponse};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrisisAlertPayload {
    pub id: String,
    pub session_id: String,
    /// `high`, `medium`, or `low`.
    pub severity: String,
    /// `pending`, `resolved`, or `escalated`.
    pub status: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl From<CrisisAlert> for CrisisAlertPayload {
    fn from(alert: CrisisAlert) -> Self {
        Self {
            id: alert.id,
            session_id: alert.session_id,
            severity: alert.severity.as_str().to_string(),
            status: alert.status.as_str().to_string(),
            description: alert.description,
            timestamp: alert.timestamp,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlertCountsPayload {
    pub pending: usize,
    pub resolved: usize,
    pub escalated: usize,
}

impl From<AlertCounts> for AlertCountsPayload {
    fn from(counts: AlertCounts) -> Self {
        Self {
            pending: counts.pending,
            resolved: counts.resolved,
            escalated: counts.escalated,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryViewsPayload {
    pub category: String,
    pub label: String,
    pub views: u64,
}

impl From<CategoryViews> for CategoryViewsPayload {
    fn from(entry: CategoryViews) -> Self {
        Self {
            category: entry.category.as_str().to_string(),
            label: entry.category.label().to_string(),
            views: entry.views,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub community_posts: usize,
    pub counselor_bookings: usize,
    pub chat_sessions: usize,
    pub crisis_interventions: usize,
    pub resource_views: u64,
    pub resource_views_by_category: Vec<CategoryViewsPayload>,
    pub alert_counts: AlertCountsPayload,
    pub alerts: Vec<CrisisAlertPayload>,
}

impl From<Overview> for OverviewResponse {
    fn from(overview: Overview) -> Self {
        Self {
            community_posts: overview.community_posts,
            counselor_bookings: overview.counselor_bookings,
            chat_sessions: overview.chat_sessions,
            crisis_interventions: overview.crisis_interventions,
            resource_views: overview.resource_views,
            resource_views_by_category: overview
                .resource_views_by_category
                .into_iter()
                .map(Into::into)
                .collect(),
            alert_counts: overview.alert_counts.into(),
            alerts: overview.alerts.into_iter().map(Into::into).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/overview",
    tag = "admin",
    responses((status = 200, body = OverviewResponse))
)]
pub(crate) async fn overview(State(state): State<Arc<AppState>>) -> Json<OverviewResponse> {
    Json(state.overview().into())
}

#[utoipa::path(
    post,
    path = "/api/admin/alerts/{id}/resolve",
    tag = "admin",
    params(("id" = String, Path, description = "Alert id")),
    responses(
        (status = 200, body = CrisisAlertPayload),
        (status = 404, body = ApiErrorResponse),
        (status = 409, description = "Alert already resolved", body = ApiErrorResponse),
    )
)]
#[tracing::instrument(skip(state))]
pub(crate) async fn resolve_alert(
    State(state): State<Arc<AppState>>,
    Path(alert_id): Path<String>,
) -> Result<Json<CrisisAlertPayload>, ApiError> {
    Ok(Json(state.analytics.resolve(&alert_id)?.into()))
}

#[utoipa::path(
    post,
    path = "/api/admin/alerts/{id}/escalate",
    tag = "admin",
    params(("id" = String, Path, description = "Alert id")),
    responses(
        (status = 200, body = CrisisAlertPayload),
        (status = 404, body = ApiErrorResponse),
        (status = 409, description = "Alert is not pending", body = ApiErrorResponse),
    )
)]
#[tracing::instrument(skip(state))]
pub(crate) async fn escalate_alert(
    State(state): State<Arc<AppState>>,
    Path(alert_id): Path<String>,
) -> Result<Json<CrisisAlertPayload>, ApiError> {
    Ok(Json(state.analytics.escalate(&alert_id)?.into()))
}
