//! Counselor search and session booking endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::booking::{Booking, BookingRequest, Counselor, DayAvailability, SessionType};
use crate::error::{WellnessError, WellnessResult};
use crate::server::error::{ApiError, ApiErrorResponse};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DayAvailabilityPayload {
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

impl From<&DayAvailability> for DayAvailabilityPayload {
    fn from(day: &DayAvailability) -> Self {
        Self {
            date: day.date,
            slots: day.slots.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CounselorPayload {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub experience: String,
    pub bio: String,
    pub availability: Vec<DayAvailabilityPayload>,
    pub session_types: Vec<String>,
}

impl From<&Counselor> for CounselorPayload {
    fn from(counselor: &Counselor) -> Self {
        Self {
            id: counselor.id.clone(),
            name: counselor.name.clone(),
            title: counselor.title.clone(),
            specialties: counselor.specialties.clone(),
            rating: counselor.rating,
            experience: counselor.experience.clone(),
            bio: counselor.bio.clone(),
            availability: counselor.availability.iter().map(Into::into).collect(),
            session_types: counselor
                .session_types
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CounselorsResponse {
    pub counselors: Vec<CounselorPayload>,
    pub count: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CounselorQuery {
    /// Matches name, title, or specialty.
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SlotsQuery {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub counselor_id: String,
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionRequest {
    #[serde(default)]
    pub counselor_id: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: String,
    /// `video`, `phone`, or `chat`.
    pub session_type: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub id: String,
    pub counselor_id: String,
    pub counselor_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub session_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingPayload {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            counselor_id: booking.counselor_id,
            counselor_name: booking.counselor_name,
            date: booking.date,
            time: booking.time,
            session_type: booking.session_type.as_str().to_string(),
            reason: booking.reason,
            created_at: booking.created_at,
        }
    }
}

fn parse_session_type(raw: &str) -> WellnessResult<SessionType> {
    match raw.trim() {
        "video" => Ok(SessionType::Video),
        "phone" => Ok(SessionType::Phone),
        "chat" => Ok(SessionType::Chat),
        other => Err(WellnessError::InvalidInput(format!(
            "unknown session type: {other}"
        ))),
    }
}

#[utoipa::path(
    get,
    path = "/api/counselors",
    tag = "booking",
    params(CounselorQuery),
    responses((status = 200, body = CounselorsResponse))
)]
pub(crate) async fn list_counselors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CounselorQuery>,
) -> Json<CounselorsResponse> {
    let counselors = state
        .desk
        .find_counselors(query.q.as_deref().unwrap_or_default())
        .into_iter()
        .map(CounselorPayload::from)
        .collect::<Vec<_>>();
    Json(CounselorsResponse {
        count: counselors.len(),
        counselors,
    })
}

#[utoipa::path(
    get,
    path = "/api/counselors/{id}/slots",
    tag = "booking",
    params(("id" = String, Path, description = "Counselor id"), SlotsQuery),
    responses(
        (status = 200, description = "Unbooked slots for the date", body = SlotsResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn available_slots(
    State(state): State<Arc<AppState>>,
    Path(counselor_id): Path<String>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, ApiError> {
    let slots = state.desk.available_slots(&counselor_id, query.date)?;
    Ok(Json(SlotsResponse {
        counselor_id,
        date: query.date,
        slots,
    }))
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "booking",
    request_body = BookSessionRequest,
    responses(
        (status = 200, body = BookingPayload),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse),
        (status = 409, description = "Slot already booked", body = ApiErrorResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn book_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookSessionRequest>,
) -> Result<Json<BookingPayload>, ApiError> {
    let session_type = payload
        .session_type
        .as_deref()
        .map(parse_session_type)
        .transpose()?;
    let booking = state.desk.book(BookingRequest {
        counselor_id: payload.counselor_id,
        date: payload.date,
        time: payload.time,
        session_type,
        reason: payload.reason,
    })?;
    Ok(Json(booking.into()))
}
