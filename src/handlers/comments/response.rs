//! Comment response DTOs

use serde::Serialize;

use crate::models::CommentWithCounts;

/// Paginated comment list
#[derive(Debug, Serialize)]
pub struct CommentsListResponse {
    pub comments: Vec<CommentWithCounts>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
