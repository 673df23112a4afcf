//! Comment repository
//!
//! Reaction and reply counts are served by the `comment_engagement` SQL
//! function when the deployed schema provides it; the repository exposes both
//! the function call and the manual aggregation so the service can fall back
//! when the function is absent (SQLSTATE 42883).

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Comment, CommentReaction, CommentWithCounts},
};

const COUNTS_SELECT: &str = r#"
    SELECT
        c.*,
        u.name AS user_name,
        u.avatar_url AS user_avatar_url,
        (SELECT COUNT(*) FROM comments r WHERE r.parent_comment_id = c.comment_id) AS reply_count,
        (SELECT COUNT(*) FROM comment_reactions cr
            WHERE cr.comment_id = c.comment_id AND cr.reaction_type = 'like') AS like_count,
        (SELECT COUNT(*) FROM comment_reactions cr
            WHERE cr.comment_id = c.comment_id AND cr.reaction_type = 'dislike') AS dislike_count
    FROM comments c
    JOIN users u ON u.user_id = c.user_id
"#;

/// Repository for comment database operations
pub struct CommentRepository;

impl CommentRepository {
    /// Create a comment or reply
    pub async fn create(
        pool: &PgPool,
        match_id: i64,
        user_id: i64,
        parent_comment_id: Option<i64>,
        comment_text: &str,
    ) -> AppResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (match_id, user_id, parent_comment_id, comment_text)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(user_id)
        .bind(parent_comment_id)
        .bind(comment_text)
        .fetch_one(pool)
        .await?;

        Ok(comment)
    }

    /// Find a comment by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(r#"SELECT * FROM comments WHERE comment_id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(comment)
    }

    /// Top-level comments for a match via the server-side counting function,
    /// paginated, newest first
    pub async fn list_top_level_rpc(
        pool: &PgPool,
        match_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CommentWithCounts>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithCounts>(
            r#"SELECT * FROM comment_engagement($1) ORDER BY created_at DESC OFFSET $2 LIMIT $3"#,
        )
        .bind(match_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Top-level comments for a match with counts aggregated manually
    pub async fn list_top_level_manual(
        pool: &PgPool,
        match_id: i64,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<CommentWithCounts>> {
        let sql = format!(
            r#"
            {COUNTS_SELECT}
            WHERE c.match_id = $1 AND c.parent_comment_id IS NULL
            ORDER BY c.created_at DESC
            OFFSET $2 LIMIT $3
            "#
        );

        let comments = sqlx::query_as::<_, CommentWithCounts>(&sql)
            .bind(match_id)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok(comments)
    }

    /// Count top-level comments for a match
    pub async fn count_top_level(pool: &PgPool, match_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM comments WHERE match_id = $1 AND parent_comment_id IS NULL"#,
        )
        .bind(match_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Replies to a comment, oldest first
    pub async fn list_replies(pool: &PgPool, parent_id: i64) -> AppResult<Vec<CommentWithCounts>> {
        let sql = format!(
            r#"
            {COUNTS_SELECT}
            WHERE c.parent_comment_id = $1
            ORDER BY c.created_at
            "#
        );

        let replies = sqlx::query_as::<_, CommentWithCounts>(&sql)
            .bind(parent_id)
            .fetch_all(pool)
            .await?;

        Ok(replies)
    }

    /// Update a comment's text
    pub async fn update_text(pool: &PgPool, id: i64, comment_text: &str) -> AppResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET comment_text = $2, updated_at = NOW()
            WHERE comment_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(comment_text)
        .fetch_one(pool)
        .await?;

        Ok(comment)
    }

    /// Delete a comment together with its replies and reactions
    pub async fn delete_with_replies(pool: &PgPool, id: i64) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM comment_reactions
            WHERE comment_id = $1
                OR comment_id IN (SELECT comment_id FROM comments WHERE parent_comment_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(r#"DELETE FROM comments WHERE parent_comment_id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r#"DELETE FROM comments WHERE comment_id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    // =========================================================================
    // Reactions
    // =========================================================================

    /// A user's existing reaction to a comment, if any
    pub async fn find_reaction(
        pool: &PgPool,
        comment_id: i64,
        user_id: i64,
    ) -> AppResult<Option<CommentReaction>> {
        let reaction = sqlx::query_as::<_, CommentReaction>(
            r#"SELECT * FROM comment_reactions WHERE comment_id = $1 AND user_id = $2"#,
        )
        .bind(comment_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(reaction)
    }

    /// Add a reaction
    pub async fn insert_reaction(
        pool: &PgPool,
        comment_id: i64,
        user_id: i64,
        reaction_type: &str,
    ) -> AppResult<CommentReaction> {
        let reaction = sqlx::query_as::<_, CommentReaction>(
            r#"
            INSERT INTO comment_reactions (comment_id, user_id, reaction_type)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(comment_id)
        .bind(user_id)
        .bind(reaction_type)
        .fetch_one(pool)
        .await?;

        Ok(reaction)
    }

    /// Change the type of an existing reaction
    pub async fn update_reaction(
        pool: &PgPool,
        reaction_id: i64,
        reaction_type: &str,
    ) -> AppResult<CommentReaction> {
        let reaction = sqlx::query_as::<_, CommentReaction>(
            r#"
            UPDATE comment_reactions
            SET reaction_type = $2
            WHERE reaction_id = $1
            RETURNING *
            "#,
        )
        .bind(reaction_id)
        .bind(reaction_type)
        .fetch_one(pool)
        .await?;

        Ok(reaction)
    }

    /// Remove a reaction
    pub async fn delete_reaction(pool: &PgPool, reaction_id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM comment_reactions WHERE reaction_id = $1"#)
            .bind(reaction_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Count reactions of one type on a comment via the server-side function
    pub async fn count_reactions_rpc(
        pool: &PgPool,
        comment_id: i64,
        reaction_type: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(r#"SELECT count_comment_reactions($1, $2)"#)
            .bind(comment_id)
            .bind(reaction_type)
            .fetch_one(pool)
            .await
    }

    /// Count reactions of one type on a comment by scanning the rows
    pub async fn count_reactions_manual(
        pool: &PgPool,
        comment_id: i64,
        reaction_type: &str,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM comment_reactions WHERE comment_id = $1 AND reaction_type = $2"#,
        )
        .bind(comment_id)
        .bind(reaction_type)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
