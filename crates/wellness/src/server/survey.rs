//! Survey submission endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::server::error::{ApiError, ApiErrorResponse};
use crate::state::AppState;
use crate::survey::{NewSurvey, Survey};

/// Client user id, sent either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl From<UserId> for String {
    fn from(user_id: UserId) -> Self {
        match user_id {
            UserId::Number(id) => id.to_string(),
            UserId::Text(id) => id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurveyRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Answer document; any JSON value except `null`.
    #[serde(default)]
    pub answers: Value,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPayload {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub answers: Value,
    pub created_at: DateTime<Utc>,
}

impl From<Survey> for SurveyPayload {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.id,
            user_id: survey.user_id,
            answers: survey.answers,
            created_at: survey.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitSurveyResponse {
    pub msg: String,
    pub survey: SurveyPayload,
}

#[utoipa::path(
    post,
    path = "/api/survey",
    tag = "survey",
    request_body = SubmitSurveyRequest,
    responses(
        (status = 200, body = SubmitSurveyResponse),
        (status = 400, body = ApiErrorResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn submit(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitSurveyRequest>,
) -> Result<Json<SubmitSurveyResponse>, ApiError> {
    let survey = Survey::create(NewSurvey {
        user_id: payload.user_id.map(String::from),
        answers: payload.answers,
    })?;
    let survey = state.surveys.insert(survey)?;
    Ok(Json(SubmitSurveyResponse {
        msg: "Survey submitted successfully".to_string(),
        survey: survey.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/survey",
    tag = "survey",
    responses(
        (status = 200, description = "All surveys in submission order", body = [SurveyPayload]),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub(crate) async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SurveyPayload>>, ApiError> {
    let surveys = state.surveys.list()?;
    Ok(Json(surveys.into_iter().map(SurveyPayload::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/survey/{id}",
    tag = "survey",
    params(("id" = String, Path, description = "Survey id")),
    responses(
        (status = 200, body = SurveyPayload),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn get_survey(
    State(state): State<Arc<AppState>>,
    Path(survey_id): Path<String>,
) -> Result<Json<SurveyPayload>, ApiError> {
    Ok(Json(state.surveys.get(&survey_id)?.into()))
}
