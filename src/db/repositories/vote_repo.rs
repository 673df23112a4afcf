//! Vote ledger and aggregate repository
//!
//! Data access for the three vote stores: the outcome-vote ledger, the
//! score-prediction ledger (pre-aggregated per scoreline), and the cached
//! per-class vote counts derived from them. Functions on the recompute path
//! are generic over the executor so the service can run them inside one
//! transaction.

use sqlx::{PgExecutor, PgPool};

use crate::{
    error::AppResult,
    models::{MatchOutcome, MatchVoteCounts, OutcomeVote, ScorePrediction, UserScorePick, VoterClass, Winner},
};

/// Repository for vote ledger and aggregate operations
pub struct VoteRepository;

impl VoteRepository {
    // =========================================================================
    // Outcome-vote ledger
    // =========================================================================

    /// All predicted winners recorded for a match by one voter class
    pub async fn list_winners<'e, E>(
        executor: E,
        match_id: i64,
        class: VoterClass,
    ) -> AppResult<Vec<String>>
    where
        E: PgExecutor<'e>,
    {
        let winners: Vec<String> = sqlx::query_scalar(
            r#"SELECT predicted_winner FROM outcome_votes WHERE match_id = $1 AND voter_class = $2"#,
        )
        .bind(match_id)
        .bind(class.as_str())
        .fetch_all(executor)
        .await?;

        Ok(winners)
    }

    /// List outcome votes with optional filters, newest first
    pub async fn list_votes(
        pool: &PgPool,
        match_id: Option<i64>,
        voter_id: Option<i64>,
        class: Option<VoterClass>,
    ) -> AppResult<Vec<OutcomeVote>> {
        let votes = sqlx::query_as::<_, OutcomeVote>(
            r#"
            SELECT * FROM outcome_votes
            WHERE
                ($1::bigint IS NULL OR match_id = $1)
                AND ($2::bigint IS NULL OR voter_id = $2)
                AND ($3::text IS NULL OR voter_class = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(match_id)
        .bind(voter_id)
        .bind(class.map(|c| c.as_str()))
        .fetch_all(pool)
        .await?;

        Ok(votes)
    }

    /// Find a voter's existing outcome vote for a match
    pub async fn find_vote_by_voter(
        pool: &PgPool,
        match_id: i64,
        voter_id: i64,
        class: VoterClass,
    ) -> AppResult<Option<OutcomeVote>> {
        let vote = sqlx::query_as::<_, OutcomeVote>(
            r#"
            SELECT * FROM outcome_votes
            WHERE match_id = $1 AND voter_id = $2 AND voter_class = $3
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(match_id)
        .bind(voter_id)
        .bind(class.as_str())
        .fetch_optional(pool)
        .await?;

        Ok(vote)
    }

    /// Find an outcome vote by ID
    pub async fn find_vote_by_id(pool: &PgPool, vote_id: i64) -> AppResult<Option<OutcomeVote>> {
        let vote =
            sqlx::query_as::<_, OutcomeVote>(r#"SELECT * FROM outcome_votes WHERE vote_id = $1"#)
                .bind(vote_id)
                .fetch_optional(pool)
                .await?;

        Ok(vote)
    }

    /// Insert a new outcome-vote ledger row
    pub async fn insert_vote(
        pool: &PgPool,
        match_id: i64,
        voter_id: i64,
        class: VoterClass,
        winner: Winner,
    ) -> AppResult<OutcomeVote> {
        let vote = sqlx::query_as::<_, OutcomeVote>(
            r#"
            INSERT INTO outcome_votes (match_id, voter_id, voter_class, predicted_winner)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(voter_id)
        .bind(class.as_str())
        .bind(winner.as_str())
        .fetch_one(pool)
        .await?;

        Ok(vote)
    }

    /// Change the pick of an existing outcome vote
    pub async fn update_vote_pick(
        pool: &PgPool,
        vote_id: i64,
        winner: Winner,
    ) -> AppResult<OutcomeVote> {
        let vote = sqlx::query_as::<_, OutcomeVote>(
            r#"
            UPDATE outcome_votes
            SET predicted_winner = $2, updated_at = NOW()
            WHERE vote_id = $1
            RETURNING *
            "#,
        )
        .bind(vote_id)
        .bind(winner.as_str())
        .fetch_one(pool)
        .await?;

        Ok(vote)
    }

    /// Delete an outcome vote by ID
    pub async fn delete_vote(pool: &PgPool, vote_id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM outcome_votes WHERE vote_id = $1"#)
            .bind(vote_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete every outcome-vote ledger row
    pub async fn clear_outcome_votes(pool: &PgPool) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM outcome_votes"#).execute(pool).await?;
        Ok(())
    }

    // =========================================================================
    // Score-prediction ledger
    // =========================================================================

    /// All score-prediction rows for a match and voter class
    pub async fn list_score_rows<'e, E>(
        executor: E,
        match_id: i64,
        class: VoterClass,
    ) -> AppResult<Vec<ScorePrediction>>
    where
        E: PgExecutor<'e>,
    {
        let rows = sqlx::query_as::<_, ScorePrediction>(
            r#"SELECT * FROM score_predictions WHERE match_id = $1 AND voter_class = $2"#,
        )
        .bind(match_id)
        .bind(class.as_str())
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    /// Score predictions for a match ordered by popularity
    pub async fn list_score_predictions(
        pool: &PgPool,
        match_id: i64,
        class: Option<VoterClass>,
    ) -> AppResult<Vec<ScorePrediction>> {
        let rows = sqlx::query_as::<_, ScorePrediction>(
            r#"
            SELECT * FROM score_predictions
            WHERE match_id = $1 AND ($2::text IS NULL OR voter_class = $2)
            ORDER BY vote_count DESC
            "#,
        )
        .bind(match_id)
        .bind(class.map(|c| c.as_str()))
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// The ledger row for one exact scoreline, if anyone has voted for it
    pub async fn find_score_row(
        pool: &PgPool,
        match_id: i64,
        home_score: i32,
        away_score: i32,
        class: VoterClass,
    ) -> AppResult<Option<ScorePrediction>> {
        let row = sqlx::query_as::<_, ScorePrediction>(
            r#"
            SELECT * FROM score_predictions
            WHERE match_id = $1 AND home_score = $2 AND away_score = $3 AND voter_class = $4
            "#,
        )
        .bind(match_id)
        .bind(home_score)
        .bind(away_score)
        .bind(class.as_str())
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    /// Add one vote to a scoreline, creating the row on first vote
    pub async fn bump_score_count(
        pool: &PgPool,
        match_id: i64,
        home_score: i32,
        away_score: i32,
        class: VoterClass,
    ) -> AppResult<ScorePrediction> {
        let row = sqlx::query_as::<_, ScorePrediction>(
            r#"
            INSERT INTO score_predictions (match_id, home_score, away_score, voter_class, vote_count)
            VALUES ($1, $2, $3, $4, 1)
            ON CONFLICT (match_id, home_score, away_score, voter_class)
            DO UPDATE SET
                vote_count = score_predictions.vote_count + 1,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(home_score)
        .bind(away_score)
        .bind(class.as_str())
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Remove one vote from a scoreline, never going below zero
    pub async fn decrement_score_count(
        pool: &PgPool,
        match_id: i64,
        home_score: i32,
        away_score: i32,
        class: VoterClass,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE score_predictions
            SET vote_count = GREATEST(vote_count - 1, 0), updated_at = NOW()
            WHERE match_id = $1 AND home_score = $2 AND away_score = $3 AND voter_class = $4
            "#,
        )
        .bind(match_id)
        .bind(home_score)
        .bind(away_score)
        .bind(class.as_str())
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete every score-prediction ledger row
    pub async fn clear_score_predictions(pool: &PgPool) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM score_predictions"#).execute(pool).await?;
        Ok(())
    }

    // =========================================================================
    // User score picks
    // =========================================================================

    /// A user's current score pick for a match, if any
    pub async fn find_pick(
        pool: &PgPool,
        match_id: i64,
        user_id: i64,
    ) -> AppResult<Option<UserScorePick>> {
        let pick = sqlx::query_as::<_, UserScorePick>(
            r#"SELECT * FROM user_score_picks WHERE match_id = $1 AND user_id = $2"#,
        )
        .bind(match_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(pick)
    }

    /// Record or replace a user's current score pick
    pub async fn upsert_pick(
        pool: &PgPool,
        match_id: i64,
        user_id: i64,
        home_score: i32,
        away_score: i32,
    ) -> AppResult<UserScorePick> {
        let pick = sqlx::query_as::<_, UserScorePick>(
            r#"
            INSERT INTO user_score_picks (match_id, user_id, home_score, away_score)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (match_id, user_id)
            DO UPDATE SET
                home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(user_id)
        .bind(home_score)
        .bind(away_score)
        .fetch_one(pool)
        .await?;

        Ok(pick)
    }

    /// Delete every score pick
    pub async fn clear_score_picks(pool: &PgPool) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM user_score_picks"#).execute(pool).await?;
        Ok(())
    }

    // =========================================================================
    // Cached vote aggregates
    // =========================================================================

    /// Cached per-class aggregate for a match, if one has been computed
    pub async fn find_counts<'e, E>(
        executor: E,
        match_id: i64,
        class: VoterClass,
    ) -> AppResult<Option<MatchVoteCounts>>
    where
        E: PgExecutor<'e>,
    {
        let counts = sqlx::query_as::<_, MatchVoteCounts>(
            r#"SELECT * FROM match_vote_counts WHERE match_id = $1 AND voter_class = $2"#,
        )
        .bind(match_id)
        .bind(class.as_str())
        .fetch_optional(executor)
        .await?;

        Ok(counts)
    }

    /// Write a freshly recomputed per-class aggregate row
    pub async fn upsert_counts<'e, E>(
        executor: E,
        match_id: i64,
        class: VoterClass,
        home_votes: i64,
        draw_votes: i64,
        away_votes: i64,
        total_votes: i64,
    ) -> AppResult<MatchVoteCounts>
    where
        E: PgExecutor<'e>,
    {
        let counts = sqlx::query_as::<_, MatchVoteCounts>(
            r#"
            INSERT INTO match_vote_counts
                (match_id, voter_class, home_votes, draw_votes, away_votes, total_votes)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (match_id, voter_class)
            DO UPDATE SET
                home_votes = EXCLUDED.home_votes,
                draw_votes = EXCLUDED.draw_votes,
                away_votes = EXCLUDED.away_votes,
                total_votes = EXCLUDED.total_votes,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(class.as_str())
        .bind(home_votes)
        .bind(draw_votes)
        .bind(away_votes)
        .bind(total_votes)
        .fetch_one(executor)
        .await?;

        Ok(counts)
    }

    /// Zero every cached aggregate row (remove-all-votes maintenance)
    pub async fn reset_all_counts(pool: &PgPool) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE match_vote_counts
            SET home_votes = 0, draw_votes = 0, away_votes = 0, total_votes = 0, updated_at = NOW()
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    // =========================================================================
    // Editorial match outcomes
    // =========================================================================

    /// Admin-set outcome probabilities for a match, if any
    pub async fn find_outcome(pool: &PgPool, match_id: i64) -> AppResult<Option<MatchOutcome>> {
        let outcome =
            sqlx::query_as::<_, MatchOutcome>(r#"SELECT * FROM match_outcomes WHERE match_id = $1"#)
                .bind(match_id)
                .fetch_optional(pool)
                .await?;

        Ok(outcome)
    }

    /// Create or replace the outcome probabilities for a match
    pub async fn upsert_outcome(
        pool: &PgPool,
        match_id: i64,
        home_win_prob: f64,
        draw_prob: f64,
        away_win_prob: f64,
    ) -> AppResult<MatchOutcome> {
        let outcome = sqlx::query_as::<_, MatchOutcome>(
            r#"
            INSERT INTO match_outcomes (match_id, home_win_prob, draw_prob, away_win_prob)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (match_id)
            DO UPDATE SET
                home_win_prob = EXCLUDED.home_win_prob,
                draw_prob = EXCLUDED.draw_prob,
                away_win_prob = EXCLUDED.away_win_prob,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(match_id)
        .bind(home_win_prob)
        .bind(draw_prob)
        .bind(away_win_prob)
        .fetch_one(pool)
        .await?;

        Ok(outcome)
    }
}
