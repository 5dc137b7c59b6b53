//! Counselor directory and session booking.

use chrono::{DateTime, NaiveDate, Utc};
use content::query::{fields_match, normalize_search_text};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WellnessError, WellnessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Video,
    Phone,
    Chat,
}

impl SessionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Phone => "phone",
            Self::Chat => "chat",
        }
    }
}

/// Open slots for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counselor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub experience: String,
    pub bio: String,
    pub availability: Vec<DayAvailability>,
    pub session_types: Vec<SessionType>,
}

impl Counselor {
    /// Slots published for `date`, before subtracting bookings.
    pub fn published_slots(&self, date: NaiveDate) -> &[String] {
        self.availability
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.slots.as_slice())
            .unwrap_or_default()
    }

    pub fn offers(&self, session_type: SessionType) -> bool {
        self.session_types.contains(&session_type)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub counselor_id: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: String,
    pub session_type: Option<SessionType>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub counselor_id: String,
    pub counselor_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub session_type: SessionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Counselor directory plus the bookings made against it.
#[derive(Debug, Default)]
pub struct BookingDesk {
    counselors: Vec<Counselor>,
    bookings: RwLock<Vec<Booking>>,
}

impl BookingDesk {
    pub fn new(counselors: Vec<Counselor>) -> Self {
        Self {
            counselors,
            bookings: RwLock::new(Vec::new()),
        }
    }

    pub fn counselors(&self) -> &[Counselor] {
        &self.counselors
    }

    pub fn counselor(&self, counselor_id: &str) -> WellnessResult<&Counselor> {
        self.counselors
            .iter()
            .find(|counselor| counselor.id == counselor_id)
            .ok_or_else(|| WellnessError::NotFound(format!("counselor {counselor_id}")))
    }

    /// Case-insensitive substring search over name, title, and specialties.
    pub fn find_counselors(&self, search_text: &str) -> Vec<&Counselor> {
        let needle = normalize_search_text(search_text.trim());
        self.counselors
            .iter()
            .filter(|counselor| {
                fields_match(
                    &needle,
                    [counselor.name.as_str(), counselor.title.as_str()]
                        .into_iter()
                        .chain(counselor.specialties.iter().map(String::as_str)),
                )
            })
            .collect()
    }

    /// Published slots for `date` that have not been booked yet, in
    /// published order. A day without availability yields no slots.
    pub fn available_slots(
        &self,
        counselor_id: &str,
        date: NaiveDate,
    ) -> WellnessResult<Vec<String>> {
        let counselor = self.counselor(counselor_id)?;
        let bookings = self.bookings.read();
        Ok(counselor
            .published_slots(date)
            .iter()
            .filter(|slot| !is_booked(&bookings, counselor_id, date, slot))
            .cloned()
            .collect())
    }

    pub fn book(&self, request: BookingRequest) -> WellnessResult<Booking> {
        let counselor_id = request.counselor_id.trim();
        if counselor_id.is_empty() {
            return Err(WellnessError::InvalidInput("counselor is required".to_string()));
        }
        let date = request
            .date
            .ok_or_else(|| WellnessError::InvalidInput("date is required".to_string()))?;
        let time = request.time.trim();
        if time.is_empty() {
            return Err(WellnessError::InvalidInput("time is required".to_string()));
        }
        let session_type = request
            .session_type
            .ok_or_else(|| WellnessError::InvalidInput("session type is required".to_string()))?;

        let counselor = self.counselor(counselor_id)?;
        if !counselor.offers(session_type) {
            return Err(WellnessError::InvalidInput(format!(
                "{} does not offer {} sessions",
                counselor.name,
                session_type.as_str()
            )));
        }
        if !counselor.published_slots(date).iter().any(|slot| slot == time) {
            return Err(WellnessError::InvalidInput(format!(
                "{} has no {time} slot on {date}",
                counselor.name
            )));
        }

        let mut bookings = self.bookings.write();
        if is_booked(&bookings, counselor_id, date, time) {
            return Err(WellnessError::Conflict(format!(
                "{time} on {date} is already booked"
            )));
        }

        let booking = Booking {
            id: Uuid::now_v7().to_string(),
            counselor_id: counselor.id.clone(),
            counselor_name: counselor.name.clone(),
            date,
            time: time.to_string(),
            session_type,
            reason: request
                .reason
                .map(|reason| reason.trim().to_string())
                .filter(|reason| !reason.is_empty()),
            created_at: Utc::now(),
        };
        bookings.push(booking.clone());
        tracing::info!(
            booking_id = %booking.id,
            counselor_id = %booking.counselor_id,
            date = %booking.date,
            "session booked"
        );
        Ok(booking)
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }
}

fn is_booked(bookings: &[Booking], counselor_id: &str, date: NaiveDate, time: &str) -> bool {
    bookings.iter().any(|booking| {
        booking.counselor_id == counselor_id && booking.date == date && booking.time == time
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 10).unwrap()
    }

    fn desk() -> BookingDesk {
        BookingDesk::new(fixtures::counselors(today()))
    }

    fn request(time: &str, session_type: SessionType) -> BookingRequest {
        BookingRequest {
            counselor_id: "1".to_string(),
            date: Some(today()),
            time: time.to_string(),
            session_type: Some(session_type),
            reason: Some("  exam stress ".to_string()),
        }
    }

    #[test]
    fn available_slots_for_day() {
        let desk = desk();
        let slots = desk.available_slots("1", today()).unwrap();
        assert_eq!(slots, vec!["9:00 AM", "11:00 AM", "2:00 PM", "4:00 PM"]);

        let far = today() + chrono::Duration::days(30);
        assert!(desk.available_slots("1", far).unwrap().is_empty());
        assert!(desk.available_slots("99", today()).is_err());
    }

    #[test]
    fn booking_removes_slot() {
        let desk = desk();
        let booking = desk.book(request("11:00 AM", SessionType::Video)).unwrap();
        assert_eq!(booking.counselor_name, "Dr. Sarah Chen");
        assert_eq!(booking.reason.as_deref(), Some("exam stress"));

        let slots = desk.available_slots("1", today()).unwrap();
        assert_eq!(slots, vec!["9:00 AM", "2:00 PM", "4:00 PM"]);
        assert_eq!(desk.bookings().len(), 1);
    }

    #[test]
    fn double_booking_conflicts() {
        let desk = desk();
        desk.book(request("2:00 PM", SessionType::Phone)).unwrap();
        let err = desk.book(request("2:00 PM", SessionType::Chat)).unwrap_err();
        assert!(matches!(err, WellnessError::Conflict(_)));
    }

    #[test]
    fn booking_validates_request() {
        let desk = desk();

        let err = desk
            .book(BookingRequest {
                session_type: None,
                ..request("9:00 AM", SessionType::Video)
            })
            .unwrap_err();
        assert_eq!(err, WellnessError::InvalidInput("session type is required".to_string()));

        let err = desk.book(request("", SessionType::Video)).unwrap_err();
        assert_eq!(err, WellnessError::InvalidInput("time is required".to_string()));

        let err = desk.book(request("7:00 AM", SessionType::Video)).unwrap_err();
        assert!(err.to_string().contains("no 7:00 AM slot"));
    }

    #[test]
    fn booking_requires_offered_session_type() {
        let desk = desk();
        let err = desk
            .book(BookingRequest {
                counselor_id: "2".to_string(),
                date: Some(today()),
                time: "10:00 AM".to_string(),
                session_type: Some(SessionType::Chat),
                reason: None,
            })
            .unwrap_err();
        assert!(err.to_string().contains("does not offer chat"));
    }

    #[test]
    fn finds_counselors_by_specialty() {
        let desk = desk();
        let names = |found: Vec<&Counselor>| {
            found.iter().map(|c| c.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(desk.find_counselors("anxiety")), vec!["Dr. Sarah Chen"]);
        assert_eq!(names(desk.find_counselors("TRAUMA")), vec!["Dr. Michael Rodriguez"]);
        assert_eq!(desk.find_counselors("").len(), 3);
        assert!(desk.find_counselors("astrology").is_empty());
    }
}
