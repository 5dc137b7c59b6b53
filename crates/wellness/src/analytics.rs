//! Admin analytics: activity counters and the crisis alert queue.
//!
//! Alerts come from chat triage. A session has at most one open alert; a
//! later, more severe message raises its severity instead of queueing a
//! second alert.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use content::ResourceCategory;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::{ChatExchange, MessageKind};
use crate::error::{WellnessError, WellnessResult};

/// Assessment score at which a distress message counts as medium severity.
pub const MEDIUM_SCORE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::High => "Crisis keywords detected in support chat",
            Self::Medium => "Repeated distress signals in support chat",
            Self::Low => "Student reported anxiety or low mood in support chat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Pending,
    Resolved,
    Escalated,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Escalated => "escalated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisAlert {
    pub id: String,
    pub session_id: String,
    pub severity: Severity,
    pub status: AlertStatus,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Severity implied by one chat exchange, if any.
pub fn assess(exchange: &ChatExchange) -> Option<Severity> {
    match exchange.reply.kind {
        Some(MessageKind::Crisis) => Some(Severity::High),
        Some(MessageKind::Assessment) if exchange.assessment_score >= MEDIUM_SCORE => {
            Some(Severity::Medium)
        }
        Some(MessageKind::Assessment) => Some(Severity::Low),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlertCounts {
    pub pending: usize,
    pub resolved: usize,
    pub escalated: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryViews {
    pub category: ResourceCategory,
    pub views: u64,
}

/// Counts gathered from the other stores, passed in by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityCounts {
    pub community_posts: usize,
    pub counselor_bookings: usize,
    pub chat_sessions: usize,
}

/// Snapshot shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub community_posts: usize,
    pub counselor_bookings: usize,
    pub chat_sessions: usize,
    /// Alerts that reached high severity, whatever their status.
    pub crisis_interventions: usize,
    pub resource_views: u64,
    /// Every category, most viewed first.
    pub resource_views_by_category: Vec<CategoryViews>,
    pub alert_counts: AlertCounts,
    /// Newest first.
    pub alerts: Vec<CrisisAlert>,
}

#[derive(Debug, Default)]
pub struct Analytics {
    alerts: RwLock<Vec<CrisisAlert>>,
    resource_views: RwLock<HashMap<ResourceCategory, u64>>,
}

impl Analytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues or raises an alert for the session when the exchange shows
    /// distress. Returns the alert when it was created or changed.
    pub fn record_exchange(
        &self,
        session_id: &str,
        exchange: &ChatExchange,
    ) -> Option<CrisisAlert> {
        let severity = assess(exchange)?;
        let mut alerts = self.alerts.write();

        let open = alerts.iter_mut().find(|alert| {
            alert.session_id == session_id && alert.status == AlertStatus::Pending
        });
        if let Some(open) = open {
            if severity <= open.severity {
                return None;
            }
            open.severity = severity;
            open.description = severity.description().to_string();
            open.timestamp = exchange.message.timestamp;
            tracing::warn!(
                alert_id = %open.id,
                severity = severity.as_str(),
                "crisis alert raised"
            );
            return Some(open.clone());
        }

        let alert = CrisisAlert {
            id: Uuid::now_v7().to_string(),
            session_id: session_id.to_string(),
            severity,
            status: AlertStatus::Pending,
            description: severity.description().to_string(),
            timestamp: exchange.message.timestamp,
        };
        tracing::warn!(alert_id = %alert.id, severity = severity.as_str(), "crisis alert queued");
        alerts.push(alert.clone());
        Some(alert)
    }

    pub fn record_resource_view(&self, category: ResourceCategory) {
        *self.resource_views.write().entry(category).or_default() += 1;
    }

    pub fn resolve(&self, alert_id: &str) -> WellnessResult<CrisisAlert> {
        self.transition(alert_id, AlertStatus::Resolved)
    }

    pub fn escalate(&self, alert_id: &str) -> WellnessResult<CrisisAlert> {
        self.transition(alert_id, AlertStatus::Escalated)
    }

    /// Pending alerts may be resolved or escalated, escalated ones resolved.
    /// Resolved alerts are final.
    fn transition(&self, alert_id: &str, target: AlertStatus) -> WellnessResult<CrisisAlert> {
        let mut alerts = self.alerts.write();
        let alert = alerts
            .iter_mut()
            .find(|alert| alert.id == alert_id)
            .ok_or_else(|| WellnessError::NotFound(format!("alert {alert_id}")))?;

        let allowed = matches!(
            (alert.status, target),
            (AlertStatus::Pending, AlertStatus::Resolved | AlertStatus::Escalated)
                | (AlertStatus::Escalated, AlertStatus::Resolved)
        );
        if !allowed {
            return Err(WellnessError::Conflict(format!(
                "alert {alert_id} is {} and cannot become {}",
                alert.status.as_str(),
                target.as_str()
            )));
        }
        alert.status = target;
        tracing::info!(alert_id, status = target.as_str(), "crisis alert updated");
        Ok(alert.clone())
    }

    pub fn overview(&self, activity: ActivityCounts) -> Overview {
        let mut alerts = self.alerts.read().clone();
        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut alert_counts = AlertCounts::default();
        for alert in &alerts {
            match alert.status {
                AlertStatus::Pending => alert_counts.pending += 1,
                AlertStatus::Resolved => alert_counts.resolved += 1,
                AlertStatus::Escalated => alert_counts.escalated += 1,
            }
        }

        let views = self.resource_views.read();
        let mut by_category = ResourceCategory::ALL
            .iter()
            .map(|category| CategoryViews {
                category: *category,
                views: views.get(category).copied().unwrap_or(0),
            })
            .collect::<Vec<_>>();
        by_category.sort_by(|a, b| b.views.cmp(&a.views));

        Overview {
            community_posts: activity.community_posts,
            counselor_bookings: activity.counselor_bookings,
            chat_sessions: activity.chat_sessions,
            crisis_interventions: alerts
                .iter()
                .filter(|alert| alert.severity == Severity::High)
                .count(),
            resource_views: by_category.iter().map(|entry| entry.views).sum(),
            resource_views_by_category: by_category,
            alert_counts,
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatSessions;

    fn chat(sessions: &ChatSessions, analytics: &Analytics, id: &str, message: &str) {
        let reply = sessions.send(Some(id), message).unwrap();
        analytics.record_exchange(&reply.session_id, &reply.exchange);
    }

    #[test]
    fn supportive_messages_raise_nothing() {
        let sessions = ChatSessions::new();
        let analytics = Analytics::new();
        chat(&sessions, &analytics, "a", "hello");
        assert!(analytics.overview(ActivityCounts::default()).alerts.is_empty());
    }

    #[test]
    fn severity_follows_triage() {
        let sessions = ChatSessions::new();
        let reply = sessions.send(Some("a"), "I'm worried").unwrap();
        assert_eq!(assess(&reply.exchange), Some(Severity::Low));
        sessions.send(Some("a"), "and sad").unwrap();
        let reply = sessions.send(Some("a"), "still anxious").unwrap();
        assert_eq!(reply.exchange.assessment_score, 4);
        assert_eq!(assess(&reply.exchange), Some(Severity::Medium));
        let reply = sessions.send(Some("a"), "I feel hopeless").unwrap();
        assert_eq!(assess(&reply.exchange), Some(Severity::High));
    }

    #[test]
    fn one_open_alert_per_session() {
        let sessions = ChatSessions::new();
        let analytics = Analytics::new();
        chat(&sessions, &analytics, "a", "I'm anxious");
        chat(&sessions, &analytics, "a", "so anxious");
        chat(&sessions, &analytics, "a", "I want to end it all");
        chat(&sessions, &analytics, "b", "feeling lonely");

        let overview = analytics.overview(ActivityCounts::default());
        assert_eq!(overview.alerts.len(), 2);
        let first = overview
            .alerts
            .iter()
            .find(|alert| alert.session_id == "a")
            .unwrap();
        assert_eq!(first.severity, Severity::High);
        assert_eq!(overview.crisis_interventions, 1);
        assert_eq!(overview.alert_counts.pending, 2);
    }

    #[test]
    fn status_transitions() {
        let sessions = ChatSessions::new();
        let analytics = Analytics::new();
        chat(&sessions, &analytics, "a", "I feel hopeless");
        chat(&sessions, &analytics, "b", "I'm stressed");
        let overview = analytics.overview(ActivityCounts::default());
        let high = overview.alerts.iter().find(|a| a.session_id == "a").unwrap();
        let low = overview.alerts.iter().find(|a| a.session_id == "b").unwrap();

        assert_eq!(analytics.escalate(&high.id).unwrap().status, AlertStatus::Escalated);
        assert_eq!(analytics.resolve(&high.id).unwrap().status, AlertStatus::Resolved);
        assert!(matches!(analytics.escalate(&high.id), Err(WellnessError::Conflict(_))));
        assert_eq!(analytics.resolve(&low.id).unwrap().status, AlertStatus::Resolved);
        assert!(matches!(analytics.resolve("missing"), Err(WellnessError::NotFound(_))));

        let counts = analytics.overview(ActivityCounts::default()).alert_counts;
        assert_eq!(
            counts,
            AlertCounts {
                pending: 0,
                resolved: 2,
                escalated: 0,
            }
        );
    }

    #[test]
    fn resolved_alert_lets_session_alert_again() {
        let sessions = ChatSessions::new();
        let analytics = Analytics::new();
        chat(&sessions, &analytics, "a", "I'm worried");
        let id = analytics.overview(ActivityCounts::default()).alerts[0].id.clone();
        analytics.resolve(&id).unwrap();

        chat(&sessions, &analytics, "a", "worried again");
        let overview = analytics.overview(ActivityCounts::default());
        assert_eq!(overview.alerts.len(), 2);
        assert_eq!(overview.alert_counts.pending, 1);
    }

    #[test]
    fn counts_views_and_activity() {
        let analytics = Analytics::new();
        analytics.record_resource_view(ResourceCategory::Sleep);
        analytics.record_resource_view(ResourceCategory::Sleep);
        analytics.record_resource_view(ResourceCategory::Anxiety);

        let overview = analytics.overview(ActivityCounts {
            community_posts: 5,
            counselor_bookings: 2,
            chat_sessions: 3,
        });
        assert_eq!(overview.community_posts, 5);
        assert_eq!(overview.counselor_bookings, 2);
        assert_eq!(overview.chat_sessions, 3);
        assert_eq!(overview.resource_views, 3);
        assert_eq!(overview.resource_views_by_category.len(), ResourceCategory::ALL.len());
        assert_eq!(
            overview.resource_views_by_category[0],
            CategoryViews {
                category: ResourceCategory::Sleep,
                views: 2,
            }
        );
        assert_eq!(overview.resource_views_by_category[1].category, ResourceCategory::Anxiety);
    }
}
