//! Self-help resources (articles, videos, audio, exercises, guides).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::types::ContentItem;

use super::category::CategoryOption;

/// Resource topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Stress,
    Anxiety,
    Depression,
    Sleep,
    Mindfulness,
    Relationships,
    Academic,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 7] = [
        Self::Stress,
        Self::Anxiety,
        Self::Depression,
        Self::Sleep,
        Self::Mindfulness,
        Self::Relationships,
        Self::Academic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stress => "stress",
            Self::Anxiety => "anxiety",
            Self::Depression => "depression",
            Self::Sleep => "sleep",
            Self::Mindfulness => "mindfulness",
            Self::Relationships => "relationships",
            Self::Academic => "academic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stress => "Stress Management",
            Self::Anxiety => "Anxiety Support",
            Self::Depression => "Depression Help",
            Self::Sleep => "Sleep & Rest",
            Self::Mindfulness => "Mindfulness",
            Self::Relationships => "Relationships",
            Self::Academic => "Academic Success",
        }
    }

    /// Filter tabs, `all` first.
    pub fn options() -> Vec<CategoryOption> {
        std::iter::once(CategoryOption::all("All Resources"))
            .chain(
                Self::ALL
                    .iter()
                    .map(|category| CategoryOption::new(category.as_str(), category.label())),
            )
            .collect()
    }
}

impl FromStr for ResourceCategory {
    type Err = ContentError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ContentError::UnknownCategory(value.to_string()))
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Video,
    Audio,
    Exercise,
    Guide,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Exercise => "exercise",
            Self::Guide => "guide",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = ContentError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "article" => Ok(Self::Article),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "exercise" => Ok(Self::Exercise),
            "guide" => Ok(Self::Guide),
            other => Err(ContentError::UnknownResourceKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ContentError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(ContentError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// A library resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub category: ResourceCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Average rating out of 5.
    pub rating: f64,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// Publication time, used for recency ordering.
    pub created_at: DateTime<Utc>,
}

impl From<&Resource> for ContentItem {
    fn from(resource: &Resource) -> Self {
        ContentItem {
            id: resource.id.clone(),
            title: resource.title.clone(),
            body: resource.description.clone(),
            category: resource.category.as_str().to_string(),
            tags: resource.tags.clone(),
            created_at: resource.created_at,
            popularity_score: resource.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn resource() -> Resource {
        Resource {
            id: "1".to_string(),
            title: "5-Minute Breathing Exercise".to_string(),
            description: "A quick guided breathing exercise to help reduce anxiety".to_string(),
            kind: ResourceKind::Audio,
            category: ResourceCategory::Anxiety,
            duration: Some("5 min".to_string()),
            rating: 4.8,
            difficulty: Difficulty::Beginner,
            tags: vec!["breathing".to_string(), "quick".to_string()],
            content: None,
            media_url: Some("/audio/breathing-exercise.mp3".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn converts_to_content_item() {
        let item = ContentItem::from(&resource());
        assert_eq!(item.category, "anxiety");
        assert_eq!(item.body, "A quick guided breathing exercise to help reduce anxiety");
        assert_eq!(item.popularity_score, 4.8);
    }

    #[test]
    fn parses_enums() {
        assert_eq!("sleep".parse::<ResourceCategory>().unwrap(), ResourceCategory::Sleep);
        assert_eq!("video".parse::<ResourceKind>().unwrap(), ResourceKind::Video);
        assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("podcast".parse::<ResourceKind>().is_err());
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn options_start_with_all() {
        let options = ResourceCategory::options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0].id, "all");
        assert_eq!(options[4], CategoryOption::new("sleep", "Sleep & Rest"));
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(resource()).unwrap();
        assert_eq!(json["type"], "audio");
        assert_eq!(json["mediaUrl"], "/audio/breathing-exercise.mp3");
        assert!(json.get("content").is_none());
    }
}
