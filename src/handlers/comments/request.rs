//! Comment request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_COMMENT_LENGTH;

/// Create comment request; a `parent_comment_id` makes it a reply
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = MAX_COMMENT_LENGTH))]
    pub comment_text: String,

    pub parent_comment_id: Option<i64>,
}

/// Update comment request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = MAX_COMMENT_LENGTH))]
    pub comment_text: String,
}

/// React to a comment request
#[derive(Debug, Deserialize)]
pub struct ReactionRequest {
    /// like or dislike
    pub reaction_type: String,
}

/// Comment list query parameters
#[derive(Debug, Deserialize)]
pub struct ListCommentsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
