//! Match repository

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Match, MatchWithDetails},
};

const DETAILS_SELECT: &str = r#"
    SELECT
        m.*,
        ht.name AS home_team_name,
        ht.short_code AS home_team_code,
        ht.logo_url AS home_team_logo,
        aw.name AS away_team_name,
        aw.short_code AS away_team_code,
        aw.logo_url AS away_team_logo,
        l.name AS league_name,
        l.country AS league_country
    FROM matches m
    JOIN teams ht ON ht.team_id = m.home_team_id
    JOIN teams aw ON aw.team_id = m.away_team_id
    JOIN leagues l ON l.league_id = m.league_id
"#;

/// Repository for match database operations
pub struct MatchRepository;

impl MatchRepository {
    /// Create a new match
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        league_id: i64,
        home_team_id: i64,
        away_team_id: i64,
        match_date: DateTime<Utc>,
        venue: &str,
        status: &str,
        home_score: Option<i32>,
        away_score: Option<i32>,
        allow_draw: bool,
        match_timezone: &str,
        big_match: bool,
        derby: bool,
        match_type: &str,
        published: bool,
    ) -> AppResult<Match> {
        let m = sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (
                league_id, home_team_id, away_team_id, match_date, venue, status,
                home_score, away_score, allow_draw, match_timezone, big_match,
                derby, match_type, published
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(league_id)
        .bind(home_team_id)
        .bind(away_team_id)
        .bind(match_date)
        .bind(venue)
        .bind(status)
        .bind(home_score)
        .bind(away_score)
        .bind(allow_draw)
        .bind(match_timezone)
        .bind(big_match)
        .bind(derby)
        .bind(match_type)
        .bind(published)
        .fetch_one(pool)
        .await?;

        Ok(m)
    }

    /// Find match by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Match>> {
        let m = sqlx::query_as::<_, Match>(r#"SELECT * FROM matches WHERE match_id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(m)
    }

    /// Find match by ID with team and league display fields
    pub async fn find_with_details(pool: &PgPool, id: i64) -> AppResult<Option<MatchWithDetails>> {
        let sql = format!("{DETAILS_SELECT} WHERE m.match_id = $1");
        let m = sqlx::query_as::<_, MatchWithDetails>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(m)
    }

    /// List matches with optional filters, newest first
    pub async fn list(
        pool: &PgPool,
        league_id: Option<i64>,
        date: Option<NaiveDate>,
        status: Option<&str>,
    ) -> AppResult<Vec<MatchWithDetails>> {
        let sql = format!(
            r#"
            {DETAILS_SELECT}
            WHERE
                ($1::bigint IS NULL OR m.league_id = $1)
                AND ($2::date IS NULL OR m.match_date::date = $2)
                AND ($3::text IS NULL OR m.status = $3)
            ORDER BY m.match_date DESC
            "#
        );

        let matches = sqlx::query_as::<_, MatchWithDetails>(&sql)
            .bind(league_id)
            .bind(date)
            .bind(status)
            .fetch_all(pool)
            .await?;

        Ok(matches)
    }

    /// Update a match (absent fields left untouched)
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: i64,
        league_id: Option<i64>,
        home_team_id: Option<i64>,
        away_team_id: Option<i64>,
        match_date: Option<DateTime<Utc>>,
        venue: Option<&str>,
        status: Option<&str>,
        home_score: Option<i32>,
        away_score: Option<i32>,
        allow_draw: Option<bool>,
        match_timezone: Option<&str>,
        big_match: Option<bool>,
        derby: Option<bool>,
        match_type: Option<&str>,
        published: Option<bool>,
    ) -> AppResult<Match> {
        let m = sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET
                league_id = COALESCE($2, league_id),
                home_team_id = COALESCE($3, home_team_id),
                away_team_id = COALESCE($4, away_team_id),
                match_date = COALESCE($5, match_date),
                venue = COALESCE($6, venue),
                status = COALESCE($7, status),
                home_score = COALESCE($8, home_score),
                away_score = COALESCE($9, away_score),
                allow_draw = COALESCE($10, allow_draw),
                match_timezone = COALESCE($11, match_timezone),
                big_match = COALESCE($12, big_match),
                derby = COALESCE($13, derby),
                match_type = COALESCE($14, match_type),
                published = COALESCE($15, published),
                updated_at = NOW()
            WHERE match_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(league_id)
        .bind(home_team_id)
        .bind(away_team_id)
        .bind(match_date)
        .bind(venue)
        .bind(status)
        .bind(home_score)
        .bind(away_score)
        .bind(allow_draw)
        .bind(match_timezone)
        .bind(big_match)
        .bind(derby)
        .bind(match_type)
        .bind(published)
        .fetch_one(pool)
        .await?;

        Ok(m)
    }

    /// Delete a match
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM matches WHERE match_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Check a match exists
    pub async fn exists(pool: &PgPool, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM matches WHERE match_id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }
}
