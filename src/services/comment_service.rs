//! Comment service
//!
//! Threaded (one level) match comments with reaction counts. Engagement
//! counts prefer the server-side SQL functions and fall back to manual
//! aggregation only when the deployed schema lacks them.

use serde::Serialize;
use sqlx::PgPool;

use crate::{
    constants,
    db::repositories::CommentRepository,
    error::{AppError, AppResult},
    models::{Comment, CommentWithCounts},
    utils::validation,
};

/// Result of toggling a reaction
#[derive(Debug, Clone, Serialize)]
pub struct ReactionOutcome {
    /// added, removed, or changed
    pub action: &'static str,
    pub reaction_type: String,
    pub reaction_count: i64,
}

/// True when the error is Postgres telling us a function or column named in
/// the query does not exist, as opposed to a real failure
fn is_missing_capability(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            // 42883: undefined_function, 42703: undefined_column
            matches!(db.code().as_deref(), Some("42883") | Some("42703"))
        }
        _ => false,
    }
}

/// Row offset for a 1-based page. Widens before multiplying so an absurd
/// page number from the query string cannot overflow.
fn page_offset(page: u32, per_page: u32) -> i64 {
    (i64::from(page.max(1)) - 1) * i64::from(per_page)
}

/// Comment service for business logic
pub struct CommentService;

impl CommentService {
    /// Paginated top-level comments for a match, newest first, with author
    /// fields and engagement counts
    pub async fn list_for_match(
        pool: &PgPool,
        match_id: i64,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<CommentWithCounts>, i64)> {
        let offset = page_offset(page, per_page);
        let limit = per_page as i64;

        let comments =
            match CommentRepository::list_top_level_rpc(pool, match_id, offset, limit).await {
                Ok(comments) => comments,
                Err(e) if is_missing_capability(&e) => {
                    tracing::debug!(match_id, "comment_engagement function unavailable, counting manually");
                    CommentRepository::list_top_level_manual(pool, match_id, offset, limit).await?
                }
                Err(e) => return Err(e.into()),
            };

        let total = CommentRepository::count_top_level(pool, match_id).await?;

        Ok((comments, total))
    }

    /// Create a comment or a reply. Replies may only target top-level
    /// comments on the same match.
    pub async fn create(
        pool: &PgPool,
        match_id: i64,
        user_id: i64,
        parent_comment_id: Option<i64>,
        comment_text: &str,
    ) -> AppResult<Comment> {
        let text = validation::sanitize_string(comment_text);
        if text.is_empty() {
            return Err(AppError::Validation("Comment text cannot be empty".to_string()));
        }
        if text.len() as u64 > constants::MAX_COMMENT_LENGTH {
            return Err(AppError::Validation("Comment text is too long".to_string()));
        }

        if let Some(parent_id) = parent_comment_id {
            let parent = CommentRepository::find_by_id(pool, parent_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Parent comment not found".to_string()))?;

            if parent.match_id != match_id {
                return Err(AppError::Validation(
                    "Parent comment belongs to a different match".to_string(),
                ));
            }
            if parent.parent_comment_id.is_some() {
                return Err(AppError::Validation(
                    "Replies can only target top-level comments".to_string(),
                ));
            }
        }

        CommentRepository::create(pool, match_id, user_id, parent_comment_id, &text).await
    }

    /// Replies to a top-level comment, oldest first
    pub async fn list_replies(pool: &PgPool, comment_id: i64) -> AppResult<Vec<CommentWithCounts>> {
        if CommentRepository::find_by_id(pool, comment_id).await?.is_none() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        CommentRepository::list_replies(pool, comment_id).await
    }

    /// Toggle a user's reaction on a comment.
    ///
    /// No existing reaction adds one; repeating the same reaction removes it;
    /// a different reaction replaces the old one.
    pub async fn react(
        pool: &PgPool,
        comment_id: i64,
        user_id: i64,
        reaction_type: &str,
    ) -> AppResult<ReactionOutcome> {
        validation::validate_reaction_type(reaction_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if CommentRepository::find_by_id(pool, comment_id).await?.is_none() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        let existing = CommentRepository::find_reaction(pool, comment_id, user_id).await?;

        let action = match existing {
            None => {
                CommentRepository::insert_reaction(pool, comment_id, user_id, reaction_type).await?;
                "added"
            }
            Some(reaction) if reaction.reaction_type == reaction_type => {
                CommentRepository::delete_reaction(pool, reaction.reaction_id).await?;
                "removed"
            }
            Some(reaction) => {
                CommentRepository::update_reaction(pool, reaction.reaction_id, reaction_type)
                    .await?;
                "changed"
            }
        };

        let reaction_count = Self::count_reactions(pool, comment_id, reaction_type).await?;

        Ok(ReactionOutcome {
            action,
            reaction_type: reaction_type.to_string(),
            reaction_count,
        })
    }

    /// Reaction count for one type, preferring the server-side function
    async fn count_reactions(
        pool: &PgPool,
        comment_id: i64,
        reaction_type: &str,
    ) -> AppResult<i64> {
        match CommentRepository::count_reactions_rpc(pool, comment_id, reaction_type).await {
            Ok(count) => Ok(count),
            Err(e) if is_missing_capability(&e) => {
                tracing::debug!(comment_id, "count_comment_reactions function unavailable, counting manually");
                CommentRepository::count_reactions_manual(pool, comment_id, reaction_type).await
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Update a comment's text. Only the author or an admin may edit.
    pub async fn update(
        pool: &PgPool,
        comment_id: i64,
        user_id: i64,
        is_admin: bool,
        comment_text: &str,
    ) -> AppResult<Comment> {
        let text = validation::sanitize_string(comment_text);
        if text.is_empty() {
            return Err(AppError::Validation("Comment text cannot be empty".to_string()));
        }

        let comment = CommentRepository::find_by_id(pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.user_id != user_id && !is_admin {
            return Err(AppError::Forbidden(
                "You can only edit your own comments".to_string(),
            ));
        }

        CommentRepository::update_text(pool, comment_id, &text).await
    }

    /// Delete a comment and everything hanging off it. Only the author or an
    /// admin may delete.
    pub async fn delete(
        pool: &PgPool,
        comment_id: i64,
        user_id: i64,
        is_admin: bool,
    ) -> AppResult<()> {
        let comment = CommentRepository::find_by_id(pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.user_id != user_id && !is_admin {
            return Err(AppError::Forbidden(
                "You can only delete your own comments".to_string(),
            ));
        }

        CommentRepository::delete_with_replies(pool, comment_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 20), 40);
        // page 0 from the query string is treated as page 1
        assert_eq!(page_offset(0, 20), 0);
    }

    #[test]
    fn test_page_offset_huge_page_does_not_overflow() {
        assert_eq!(
            page_offset(u32::MAX, 100),
            (i64::from(u32::MAX) - 1) * 100
        );
    }
}
