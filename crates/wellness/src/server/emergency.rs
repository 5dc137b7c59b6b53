use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::emergency::{by_priority, ContactType, EmergencyContact, Priority};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub id: String,
    pub name: String,
    pub description: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_number: Option<String>,
    pub availability: String,
    /// `crisis`, `campus`, `local`, or `text`.
    #[serde(rename = "type")]
    pub contact_type: String,
    /// `high`, `medium`, or `low`.
    pub priority: String,
}

impl From<EmergencyContact> for ContactPayload {
    fn from(contact: EmergencyContact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            description: contact.description,
            phone: contact.phone,
            text_number: contact.text_number,
            availability: contact.availability,
            contact_type: match contact.contact_type {
                ContactType::Crisis => "crisis",
                ContactType::Campus => "campus",
                ContactType::Local => "local",
                ContactType::Text => "text",
            }
            .to_string(),
            priority: match contact.priority {
                Priority::High => "high",
                Priority::Medium => "medium",
                Priority::Low => "low",
            }
            .to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactsResponse {
    pub contacts: Vec<ContactPayload>,
}

#[utoipa::path(
    get,
    path = "/api/emergency/contacts",
    tag = "emergency",
    responses(
        (status = 200, description = "Contacts, high priority first", body = ContactsResponse),
    )
)]
pub(crate) async fn list_contacts(State(state): State<Arc<AppState>>) -> Json<ContactsResponse> {
    Json(ContactsResponse {
        contacts: by_priority(&state.contacts)
            .into_iter()
            .map(ContactPayload::from)
            .collect(),
    })
}
