//! Community posts.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::types::ContentItem;

use super::category::CategoryOption;

/// Community post category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Support,
    Advice,
    Success,
    Question,
    #[default]
    General,
}

impl PostCategory {
    pub const ALL: [PostCategory; 5] = [
        Self::Support,
        Self::Advice,
        Self::Success,
        Self::Question,
        Self::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Advice => "advice",
            Self::Success => "success",
            Self::Question => "question",
            Self::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Support => "Support",
            Self::Advice => "Advice",
            Self::Success => "Success Stories",
            Self::Question => "Questions",
            Self::General => "General",
        }
    }

    /// Filter tabs, `all` first.
    pub fn options() -> Vec<CategoryOption> {
        std::iter::once(CategoryOption::all("All Posts"))
            .chain(
                Self::ALL
                    .iter()
                    .map(|category| CategoryOption::new(category.as_str(), category.label())),
            )
            .collect()
    }
}

impl FromStr for PostCategory {
    type Err = ContentError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ContentError::UnknownCategory(value.to_string()))
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A community post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_initials: String,
    pub category: PostCategory,
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub replies: u32,
    pub hearts: u32,
    pub is_anonymous: bool,
    pub is_moderated: bool,
}

impl Post {
    /// Reactions plus replies.
    pub fn popularity(&self) -> u64 {
        u64::from(self.hearts) + u64::from(self.replies)
    }
}

impl From<&Post> for ContentItem {
    fn from(post: &Post) -> Self {
        ContentItem {
            id: post.id.clone(),
            title: post.title.clone(),
            body: post.content.clone(),
            category: post.category.as_str().to_string(),
            tags: post.tags.clone(),
            created_at: post.timestamp,
            popularity_score: post.popularity() as f64,
        }
    }
}
