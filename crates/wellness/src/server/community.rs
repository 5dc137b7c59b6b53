//! Community board endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use content::{Post, PostCategory, SortMode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::community::{NewPost, NewReply, Reply};
use crate::error::WellnessError;
use crate::server::error::{ApiError, ApiErrorResponse};
use crate::server::query::{CategoriesResponse, ContentQuery};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_initials: String,
    pub category: String,
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub replies: u32,
    pub hearts: u32,
    pub is_anonymous: bool,
    pub is_moderated: bool,
}

impl From<Post> for PostPayload {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            author_initials: post.author_initials,
            category: post.category.as_str().to_string(),
            tags: post.tags,
            timestamp: post.timestamp,
            replies: post.replies,
            hearts: post.hearts,
            is_anonymous: post.is_anonymous,
            is_moderated: post.is_moderated,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostsResponse {
    pub posts: Vec<PostPayload>,
    pub count: usize,
    pub scanned: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_term: Option<String>,
    pub category: String,
    pub sort: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    /// One of `support`, `advice`, `success`, `question`, `general`.
    #[serde(default)]
    pub category: Option<String>,
    /// Comma-separated tags.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPayload {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub author: String,
    pub author_initials: String,
    pub timestamp: DateTime<Utc>,
    pub hearts: u32,
    pub is_anonymous: bool,
}

impl From<Reply> for ReplyPayload {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            post_id: reply.post_id,
            content: reply.content,
            author: reply.author,
            author_initials: reply.author_initials,
            timestamp: reply.timestamp,
            hearts: reply.hearts,
            is_anonymous: reply.is_anonymous,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RepliesResponse {
    pub replies: Vec<ReplyPayload>,
    pub count: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyRequest {
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub author: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/community/posts",
    tag = "community",
    params(ContentQuery),
    responses(
        (status = 200, description = "Matching posts in final order", body = PostsResponse),
    )
)]
pub(crate) async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
) -> Json<PostsResponse> {
    let result = state.board.query_posts(&query.to_params(SortMode::Recent));
    Json(PostsResponse {
        count: result.count,
        scanned: result.scanned,
        highlight_term: result.highlight_term,
        category: result.category.to_string(),
        sort: result.sort_mode.to_string(),
        posts: result.items.into_iter().map(PostPayload::from).collect(),
    })
}

#[utoipa::path(
    post,
    path = "/api/community/posts",
    tag = "community",
    request_body = CreatePostRequest,
    responses(
        (status = 200, body = PostPayload),
        (status = 400, body = ApiErrorResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<PostPayload>, ApiError> {
    let category = match payload.category.as_deref() {
        Some(raw) => raw.parse::<PostCategory>().map_err(WellnessError::from)?,
        None => PostCategory::default(),
    };
    let post = state.board.create_post(NewPost {
        title: payload.title,
        content: payload.content,
        category,
        tags: payload.tags,
        is_anonymous: payload.is_anonymous,
        author: payload.author,
    })?;
    Ok(Json(post.into()))
}

#[utoipa::path(
    get,
    path = "/api/community/posts/{id}/replies",
    tag = "community",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Replies, oldest first", body = RepliesResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn list_replies(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> Result<Json<RepliesResponse>, ApiError> {
    let replies = state.board.replies_for(&post_id)?;
    Ok(Json(RepliesResponse {
        count: replies.len(),
        replies: replies.into_iter().map(ReplyPayload::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/community/posts/{id}/replies",
    tag = "community",
    params(("id" = String, Path, description = "Post id")),
    request_body = CreateReplyRequest,
    responses(
        (status = 200, body = ReplyPayload),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
    Json(payload): Json<CreateReplyRequest>,
) -> Result<Json<ReplyPayload>, ApiError> {
    let reply = state.board.add_reply(
        &post_id,
        NewReply {
            content: payload.content,
            is_anonymous: payload.is_anonymous,
            author: payload.author,
        },
    )?;
    Ok(Json(reply.into()))
}

#[utoipa::path(
    post,
    path = "/api/community/posts/{id}/hearts",
    tag = "community",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with its updated heart count", body = PostPayload),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn heart_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> Result<Json<PostPayload>, ApiError> {
    let post = state.board.heart_post(&post_id)?;
    Ok(Json(post.into()))
}

#[utoipa::path(
    get,
    path = "/api/community/categories",
    tag = "community",
    responses((status = 200, body = CategoriesResponse))
)]
pub(crate) async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse::new(PostCategory::options()))
}
