use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::analytics::{ActivityCounts, Analytics, Overview};
use crate::booking::BookingDesk;
use crate::chat::ChatSessions;
use crate::community::CommunityBoard;
use crate::config::ServerConfig;
use crate::emergency::EmergencyContact;
use crate::fixtures;
use crate::library::ResourceLibrary;
use crate::survey::{MemorySurveyStore, SurveyStore};

/// Everything the HTTP layer serves from.
pub struct AppState {
    pub board: CommunityBoard,
    pub library: ResourceLibrary,
    pub desk: BookingDesk,
    pub chat: ChatSessions,
    pub analytics: Analytics,
    pub contacts: Vec<EmergencyContact>,
    pub surveys: Arc<dyn SurveyStore>,
}

impl AppState {
    /// Stores with no content. Emergency contacts are always present.
    pub fn empty() -> Self {
        Self {
            board: CommunityBoard::new(),
            library: ResourceLibrary::default(),
            desk: BookingDesk::default(),
            chat: ChatSessions::new(),
            analytics: Analytics::new(),
            contacts: fixtures::emergency_contacts(),
            surveys: Arc::new(MemorySurveyStore::new()),
        }
    }

    /// Stores seeded with the sample content, timestamped relative to `now`
    /// and with counselor availability starting on `today`.
    pub fn seeded(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self {
            board: CommunityBoard::with_content(fixtures::posts(now), fixtures::replies(now)),
            library: ResourceLibrary::new(fixtures::resources(now)),
            desk: BookingDesk::new(fixtures::counselors(today)),
            ..Self::empty()
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        if config.seed_fixtures {
            let now = Utc::now();
            Self::seeded(now, now.date_naive())
        } else {
            Self::empty()
        }
    }

    pub fn overview(&self) -> Overview {
        self.analytics.overview(ActivityCounts {
            community_posts: self.board.posts().len(),
            counselor_bookings: self.desk.bookings().len(),
            chat_sessions: self.chat.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_respects_seed_flag() {
        let seeded = AppState::from_config(&ServerConfig::default());
        assert_eq!(seeded.board.posts().len(), 5);
        assert_eq!(seeded.library.resources().len(), 8);
        assert_eq!(seeded.desk.counselors().len(), 3);

        let empty = AppState::from_config(&ServerConfig {
            seed_fixtures: false,
            ..ServerConfig::default()
        });
        assert!(empty.board.posts().is_empty());
        assert!(empty.library.resources().is_empty());
        assert_eq!(empty.contacts.len(), 8);
    }

    #[test]
    fn overview_counts_live_stores() {
        let state = AppState::from_config(&ServerConfig::default());
        let reply = state.chat.send(None, "I feel hopeless").unwrap();
        state.analytics.record_exchange(&reply.session_id, &reply.exchange);

        let overview = state.overview();
        assert_eq!(overview.community_posts, 5);
        assert_eq!(overview.counselor_bookings, 0);
        assert_eq!(overview.chat_sessions, 1);
        assert_eq!(overview.crisis_interventions, 1);
    }
}
