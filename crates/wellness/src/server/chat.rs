use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::chat::{suggested_prompts, ChatMessage, MessageKind, PromptCategory, Sender};
use crate::server::error::{ApiError, ApiErrorResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Session to continue. Omit to start a new one.
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatMessagePayload {
    pub id: String,
    pub content: String,
    /// `user` or `ai`.
    pub sender: String,
    pub timestamp: DateTime<Utc>,
    /// `normal`, `assessment`, `crisis`, or `suggestion`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl From<ChatMessage> for ChatMessagePayload {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            content: message.content,
            sender: match message.sender {
                Sender::User => "user",
                Sender::Ai => "ai",
            }
            .to_string(),
            timestamp: message.timestamp,
            kind: message.kind.map(|kind| {
                match kind {
                    MessageKind::Normal => "normal",
                    MessageKind::Assessment => "assessment",
                    MessageKind::Crisis => "crisis",
                    MessageKind::Suggestion => "suggestion",
                }
                .to_string()
            }),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub session_id: String,
    pub message: ChatMessagePayload,
    pub reply: ChatMessagePayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<ChatMessagePayload>,
    pub assessment_score: u32,
    pub crisis_alert: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResponse {
    pub session_id: String,
    pub messages: Vec<ChatMessagePayload>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PromptPayload {
    pub id: String,
    pub text: String,
    /// `feeling`, `coping`, or `support`.
    pub category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PromptsResponse {
    pub prompts: Vec<PromptPayload>,
}

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, body = ApiErrorResponse),
    ),
    description = "Send one message to the support chat and receive its triage reply."
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let reply = state
        .chat
        .send(payload.session_id.as_deref(), &payload.message)?;
    state
        .analytics
        .record_exchange(&reply.session_id, &reply.exchange);

    let exchange = reply.exchange;
    Ok(Json(ChatResponse {
        session_id: reply.session_id,
        message: exchange.message.into(),
        reply: exchange.reply.into(),
        follow_up: exchange.follow_up.map(Into::into),
        assessment_score: exchange.assessment_score,
        crisis_alert: exchange.crisis_alert,
    }))
}

#[utoipa::path(
    get,
    path = "/api/chat/sessions/{id}",
    tag = "chat",
    params(("id" = String, Path, description = "Chat session id")),
    responses(
        (status = 200, description = "Transcript, oldest first", body = TranscriptResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn transcript(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let messages = state.chat.transcript(&session_id)?;
    Ok(Json(TranscriptResponse {
        session_id,
        messages: messages.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/chat/prompts",
    tag = "chat",
    responses((status = 200, body = PromptsResponse))
)]
pub(crate) async fn prompts() -> Json<PromptsResponse> {
    let prompts = suggested_prompts()
        .into_iter()
        .map(|prompt| PromptPayload {
            id: prompt.id.to_string(),
            text: prompt.text.to_string(),
            category: match prompt.category {
                PromptCategory::Feeling => "feeling",
                PromptCategory::Coping => "coping",
                PromptCategory::Support => "support",
            }
            .to_string(),
        })
        .collect();
    Json(PromptsResponse { prompts })
}
