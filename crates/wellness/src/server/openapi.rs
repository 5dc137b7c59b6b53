use utoipa::OpenApi;

use crate::server::admin::{
    AlertCountsPayload, CategoryViewsPayload, CrisisAlertPayload, OverviewResponse,
};
use crate::server::booking::{
    BookSessionRequest, BookingPayload, CounselorPayload, CounselorsResponse,
    DayAvailabilityPayload, SlotsResponse,
};
use crate::server::chat::{
    ChatMessagePayload, ChatRequest, ChatResponse, PromptPayload, PromptsResponse,
    TranscriptResponse,
};
use crate::server::community::{
    CreatePostRequest, CreateReplyRequest, PostPayload, PostsResponse, RepliesResponse,
    ReplyPayload,
};
use crate::server::emergency::{ContactPayload, ContactsResponse};
use crate::server::error::{ApiErrorBody, ApiErrorResponse};
use crate::server::query::{CategoriesResponse, CategoryOptionPayload};
use crate::server::resources::{RelatedResponse, ResourcePayload, ResourcesResponse};
use crate::server::survey::{SubmitSurveyRequest, SubmitSurveyResponse, SurveyPayload, UserId};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Wellness API",
        version = "0.1.0",
        description = "Student wellness platform: community board, resource library, \
                       counselor booking, support chat, surveys and admin analytics"
    ),
    paths(
        crate::server::survey::submit,
        crate::server::survey::list,
        crate::server::survey::get_survey,
        crate::server::community::list_posts,
        crate::server::community::create_post,
        crate::server::community::list_replies,
        crate::server::community::create_reply,
        crate::server::community::heart_post,
        crate::server::community::categories,
        crate::server::resources::list_resources,
        crate::server::resources::get_resource,
        crate::server::resources::related,
        crate::server::resources::categories,
        crate::server::booking::list_counselors,
        crate::server::booking::available_slots,
        crate::server::booking::book_session,
        crate::server::chat::send_message,
        crate::server::chat::prompts,
        crate::server::chat::transcript,
        crate::server::emergency::list_contacts,
        crate::server::admin::overview,
        crate::server::admin::resolve_alert,
        crate::server::admin::escalate_alert,
    ),
    components(schemas(
        // Error
        ApiErrorResponse,
        ApiErrorBody,
        // Survey
        SubmitSurveyRequest,
        UserId,
        SubmitSurveyResponse,
        SurveyPayload,
        // Community
        PostPayload,
        PostsResponse,
        CreatePostRequest,
        ReplyPayload,
        RepliesResponse,
        CreateReplyRequest,
        CategoryOptionPayload,
        CategoriesResponse,
        // Resources
        ResourcePayload,
        ResourcesResponse,
        RelatedResponse,
        // Booking
        CounselorPayload,
        CounselorsResponse,
        DayAvailabilityPayload,
        SlotsResponse,
        BookSessionRequest,
        BookingPayload,
        // Chat
        ChatRequest,
        ChatResponse,
        ChatMessagePayload,
        PromptPayload,
        PromptsResponse,
        TranscriptResponse,
        // Emergency
        ContactPayload,
        ContactsResponse,
        // Admin
        OverviewResponse,
        CrisisAlertPayload,
        AlertCountsPayload,
        CategoryViewsPayload,
    )),
    tags(
        (name = "survey", description = "Wellness survey submissions"),
        (name = "community", description = "Peer support board"),
        (name = "resources", description = "Self-help resource library"),
        (name = "booking", description = "Counselor search and session booking"),
        (name = "chat", description = "Support chat triage"),
        (name = "emergency", description = "Emergency contacts"),
        (name = "admin", description = "Dashboard analytics and crisis alerts"),
    )
)]
pub struct ApiDoc;
