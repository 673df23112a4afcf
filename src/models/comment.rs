//! Comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Comment database model
///
/// Threading is one level deep: a comment either is top-level
/// (`parent_comment_id` is NULL) or replies to a top-level comment.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: i64,
    pub match_id: i64,
    pub user_id: i64,
    pub parent_comment_id: Option<i64>,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment joined with author fields and aggregate counts for list views
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CommentWithCounts {
    pub comment_id: i64,
    pub match_id: i64,
    pub user_id: i64,
    pub parent_comment_id: Option<i64>,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_avatar_url: Option<String>,
    pub reply_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
}

/// One user's reaction to a comment
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CommentReaction {
    pub reaction_id: i64,
    pub comment_id: i64,
    pub user_id: i64,
    /// like or dislike
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
}
