//! Emergency contact directory.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Crisis,
    Campus,
    Local,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub description: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_number: Option<String>,
    pub availability: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub priority: Priority,
}

/// Copy of `contacts` with high priority first. Contacts of equal priority
/// keep their relative order.
pub fn by_priority(contacts: &[EmergencyContact]) -> Vec<EmergencyContact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by_key(|contact| contact.priority);
    sorted
}
