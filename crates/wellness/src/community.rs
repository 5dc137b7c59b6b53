//! Community board: posts, replies, and hearts.

use chrono::{DateTime, Utc};
use content::{search_records, Post, PostCategory, QueryParams, QueryResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WellnessError, WellnessResult};

pub const ANONYMOUS_AUTHOR: &str = "Anonymous Student";
pub const ANONYMOUS_INITIALS: &str = "AS";

/// A reply to a community post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub author: String,
    pub author_initials: String,
    pub timestamp: DateTime<Utc>,
    pub hearts: u32,
    pub is_anonymous: bool,
}

/// Draft of a new post as submitted by the composer form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    /// Comma-separated tag list.
    pub tags: String,
    pub is_anonymous: bool,
    /// Display name for non-anonymous posts.
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewReply {
    pub content: String,
    pub is_anonymous: bool,
    pub author: Option<String>,
}

#[derive(Debug, Default)]
struct BoardState {
    posts: Vec<Post>,
    replies: Vec<Reply>,
}

/// In-memory community board.
///
/// Queries run on a cloned snapshot, so the lock is never held while the
/// engine filters and sorts.
#[derive(Debug, Default)]
pub struct CommunityBoard {
    state: RwLock<BoardState>,
}

impl CommunityBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(posts: Vec<Post>, replies: Vec<Reply>) -> Self {
        Self {
            state: RwLock::new(BoardState { posts, replies }),
        }
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state.read().posts.clone()
    }

    pub fn get_post(&self, post_id: &str) -> WellnessResult<Post> {
        self.state
            .read()
            .posts
            .iter()
            .find(|post| post.id == post_id)
            .cloned()
            .ok_or_else(|| post_not_found(post_id))
    }

    /// Runs the content query engine over the current posts.
    pub fn query_posts(&self, params: &QueryParams) -> QueryResult<Post> {
        let snapshot = self.posts();
        let result = search_records(&snapshot, params);
        QueryResult {
            items: result.items.into_iter().cloned().collect(),
            count: result.count,
            scanned: result.scanned,
            highlight_term: result.highlight_term,
            category: result.category,
            sort_mode: result.sort_mode,
        }
    }

    pub fn create_post(&self, draft: NewPost) -> WellnessResult<Post> {
        let title = required(&draft.title, "title")?;
        let content = required(&draft.content, "content")?;
        let (author, author_initials) =
            resolve_author(draft.is_anonymous, draft.author.as_deref())?;

        let post = Post {
            id: Uuid::now_v7().to_string(),
            title,
            content,
            author,
            author_initials,
            category: draft.category,
            tags: parse_tags(&draft.tags),
            timestamp: Utc::now(),
            replies: 0,
            hearts: 0,
            is_anonymous: draft.is_anonymous,
            is_moderated: false,
        };

        self.state.write().posts.push(post.clone());
        tracing::info!(post_id = %post.id, category = %post.category, "community post created");
        Ok(post)
    }

    pub fn add_reply(&self, post_id: &str, draft: NewReply) -> WellnessResult<Reply> {
        let mut state = self.state.write();
        let post = state
            .posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or_else(|| post_not_found(post_id))?;
        let content = required(&draft.content, "content")?;
        let (author, author_initials) =
            resolve_author(draft.is_anonymous, draft.author.as_deref())?;
        post.replies = post.replies.saturating_add(1);

        let reply = Reply {
            id: Uuid::now_v7().to_string(),
            post_id: post_id.to_string(),
            content,
            author,
            author_initials,
            timestamp: Utc::now(),
            hearts: 0,
            is_anonymous: draft.is_anonymous,
        };
        state.replies.push(reply.clone());
        tracing::info!(post_id, reply_id = %reply.id, "community reply added");
        Ok(reply)
    }

    /// Adds a heart and returns the updated post.
    pub fn heart_post(&self, post_id: &str) -> WellnessResult<Post> {
        let mut state = self.state.write();
        let post = state
            .posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or_else(|| post_not_found(post_id))?;
        post.hearts = post.hearts.saturating_add(1);
        Ok(post.clone())
    }

    /// Replies for a post, oldest first.
    pub fn replies_for(&self, post_id: &str) -> WellnessResult<Vec<Reply>> {
        let state = self.state.read();
        if !state.posts.iter().any(|post| post.id == post_id) {
            return Err(post_not_found(post_id));
        }
        let mut replies = state
            .replies
            .iter()
            .filter(|reply| reply.post_id == post_id)
            .cloned()
            .collect::<Vec<_>>();
        replies.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(replies)
    }
}

/// Splits a comma-separated tag string, dropping empty entries.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Initials from the first letter of up to two words ("Sarah M." -> "SM").
pub fn author_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn resolve_author(is_anonymous: bool, author: Option<&str>) -> WellnessResult<(String, String)> {
    if is_anonymous {
        return Ok((ANONYMOUS_AUTHOR.to_string(), ANONYMOUS_INITIALS.to_string()));
    }
    let name = author.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(WellnessError::InvalidInput(
            "author is required for non-anonymous posts".to_string(),
        ));
    }
    Ok((name.to_string(), author_initials(name)))
}

fn required(value: &str, field: &str) -> WellnessResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WellnessError::InvalidInput(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn post_not_found(post_id: &str) -> WellnessError {
    WellnessError::NotFound(format!("post {post_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use content::SortMode;

    fn post(
        id: &str,
        category: PostCategory,
        tags: &[&str],
        hours_ago: i64,
        hearts: u32,
        replies: u32,
    ) -> Post {
        let now = Utc.with_ymd_and_hms(2024, 12, 10, 12, 0, 0).unwrap();
        Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            content: String::new(),
            author: ANONYMOUS_AUTHOR.to_string(),
            author_initials: ANONYMOUS_INITIALS.to_string(),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            timestamp: now - Duration::hours(hours_ago),
            replies,
            hearts,
            is_anonymous: true,
            is_moderated: true,
        }
    }

    fn board() -> CommunityBoard {
        CommunityBoard::with_content(
            vec![
                post("1", PostCategory::Support, &["finals", "stress"], 2, 12, 8),
                post("2", PostCategory::Success, &["anxiety"], 5, 28, 15),
                post("3", PostCategory::Advice, &["sleep", "stress"], 8, 9, 6),
            ],
            Vec::new(),
        )
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|post| post.id.as_str()).collect()
    }

    #[test]
    fn query_filters_and_sorts_posts() {
        let board = board();
        let result = board.query_posts(&QueryParams::new("stress", "all", SortMode::Popular));
        assert_eq!(ids(&result.items), vec!["1", "3"]);
        assert_eq!(result.scanned, 3);

        let result = board.query_posts(&QueryParams::new("", "all", SortMode::Popular));
        assert_eq!(ids(&result.items), vec!["2", "1", "3"]);
    }

    #[test]
    fn create_post_trims_and_parses_tags() {
        let board = CommunityBoard::new();
        let post = board
            .create_post(NewPost {
                title: "  Need study buddies ".to_string(),
                content: "Anyone up for the library?".to_string(),
                category: PostCategory::General,
                tags: "study, , library ,motivation".to_string(),
                is_anonymous: true,
                author: None,
            })
            .unwrap();
        assert_eq!(post.title, "Need study buddies");
        assert_eq!(post.tags, vec!["study", "library", "motivation"]);
        assert_eq!(post.author, ANONYMOUS_AUTHOR);
        assert_eq!(post.replies, 0);
        assert_eq!(post.hearts, 0);
        assert!(!post.is_moderated);
        assert_eq!(board.posts().len(), 1);
    }

    #[test]
    fn create_post_requires_title_and_content() {
        let board = CommunityBoard::new();
        let err = board
            .create_post(NewPost {
                title: "   ".to_string(),
                content: "body".to_string(),
                ..NewPost::default()
            })
            .unwrap_err();
        assert_eq!(err, WellnessError::InvalidInput("title is required".to_string()));
    }

    #[test]
    fn named_post_derives_initials() {
        let board = CommunityBoard::new();
        let post = board
            .create_post(NewPost {
                title: "Hello".to_string(),
                content: "First post".to_string(),
                is_anonymous: false,
                author: Some("Jamie L.".to_string()),
                ..NewPost::default()
            })
            .unwrap();
        assert_eq!(post.author, "Jamie L.");
        assert_eq!(post.author_initials, "JL");

        let err = board
            .create_post(NewPost {
                title: "Hello".to_string(),
                content: "First post".to_string(),
                is_anonymous: false,
                author: None,
                ..NewPost::default()
            })
            .unwrap_err();
        assert!(matches!(err, WellnessError::InvalidInput(_)));
    }

    #[test]
    fn reply_increments_count() {
        let board = board();
        let reply = board
            .add_reply(
                "1",
                NewReply {
                    content: "Break tasks into small pieces.".to_string(),
                    is_anonymous: true,
                    author: None,
                },
            )
            .unwrap();
        assert_eq!(reply.post_id, "1");
        assert_eq!(board.get_post("1").unwrap().replies, 9);
        assert_eq!(board.replies_for("1").unwrap(), vec![reply]);
        assert!(board.replies_for("2").unwrap().is_empty());
    }

    #[test]
    fn reply_to_missing_post_fails() {
        let board = board();
        let err = board
            .add_reply(
                "missing",
                NewReply {
                    content: "hi".to_string(),
                    ..NewReply::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, WellnessError::NotFound(_)));
        assert!(board.replies_for("missing").is_err());
    }

    #[test]
    fn invalid_reply_leaves_count_unchanged() {
        let board = board();
        let err = board
            .add_reply(
                "1",
                NewReply {
                    content: "named but no author".to_string(),
                    ..NewReply::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, WellnessError::InvalidInput(_)));
        assert_eq!(board.get_post("1").unwrap().replies, 8);
        assert!(board.replies_for("1").unwrap().is_empty());
    }

    #[test]
    fn hearts_change_popularity_order() {
        let board = board();
        for _ in 0..30 {
            board.heart_post("3").unwrap();
        }
        assert_eq!(board.get_post("3").unwrap().hearts, 39);
        let result = board.query_posts(&QueryParams::new("", "all", SortMode::Popular));
        assert_eq!(ids(&result.items), vec!["3", "2", "1"]);
    }

    #[test]
    fn initials_handle_odd_names() {
        assert_eq!(author_initials("sarah m."), "SM");
        assert_eq!(author_initials("Prince"), "P");
        assert_eq!(author_initials("  Ana  Maria  Lopez "), "AM");
        assert_eq!(author_initials(""), "");
    }
}
