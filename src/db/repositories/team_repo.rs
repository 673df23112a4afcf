//! Team repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Team};

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Create a new team
    pub async fn create(
        pool: &PgPool,
        name: &str,
        short_code: &str,
        country: &str,
        team_type: &str,
        logo_url: Option<&str>,
    ) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, short_code, country, team_type, logo_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(short_code)
        .bind(country)
        .bind(team_type)
        .bind(logo_url)
        .fetch_one(pool)
        .await?;

        Ok(team)
    }

    /// Find team by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE team_id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }

    /// List all teams ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(teams)
    }

    /// Update a team (absent fields left untouched)
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        short_code: Option<&str>,
        country: Option<&str>,
        team_type: Option<&str>,
        logo_url: Option<&str>,
    ) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET
                name = COALESCE($2, name),
                short_code = COALESCE($3, short_code),
                country = COALESCE($4, country),
                team_type = COALESCE($5, team_type),
                logo_url = COALESCE($6, logo_url),
                updated_at = NOW()
            WHERE team_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(short_code)
        .bind(country)
        .bind(team_type)
        .bind(logo_url)
        .fetch_one(pool)
        .await?;

        Ok(team)
    }

    /// Delete a team
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM teams WHERE team_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
