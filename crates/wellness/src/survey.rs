//! Wellness survey submissions.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{WellnessError, WellnessResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,
    pub user_id: Option<String>,
    /// Free-form answer document as submitted by the client.
    pub answers: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewSurvey {
    pub user_id: Option<String>,
    pub answers: Value,
}

impl Survey {
    /// Validates a submission and stamps it with an id and creation time.
    pub fn create(submission: NewSurvey) -> WellnessResult<Self> {
        if submission.answers.is_null() {
            return Err(WellnessError::InvalidInput("answers are required".to_string()));
        }
        Ok(Self {
            id: Uuid::now_v7().to_string(),
            user_id: submission
                .user_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            answers: submission.answers,
            created_at: Utc::now(),
        })
    }
}

pub trait SurveyStore: Send + Sync {
    fn insert(&self, survey: Survey) -> WellnessResult<Survey>;
    /// All surveys in submission order.
    fn list(&self) -> WellnessResult<Vec<Survey>>;
    fn get(&self, id: &str) -> WellnessResult<Survey>;
}

#[derive(Debug, Default)]
pub struct MemorySurveyStore {
    surveys: RwLock<Vec<Survey>>,
}

impl MemorySurveyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SurveyStore for MemorySurveyStore {
    fn insert(&self, survey: Survey) -> WellnessResult<Survey> {
        let mut surveys = self.surveys.write();
        if surveys.iter().any(|existing| existing.id == survey.id) {
            return Err(WellnessError::Conflict(format!("survey {}", survey.id)));
        }
        surveys.push(survey.clone());
        tracing::info!(survey_id = %survey.id, "survey stored");
        Ok(survey)
    }

    fn list(&self) -> WellnessResult<Vec<Survey>> {
        Ok(self.surveys.read().clone())
    }

    fn get(&self, id: &str) -> WellnessResult<Survey> {
        self.surveys
            .read()
            .iter()
            .find(|survey| survey.id == id)
            .cloned()
            .ok_or_else(|| WellnessError::NotFound(format!("survey {id}")))
    }
}
