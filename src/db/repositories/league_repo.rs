//! League repository

use sqlx::PgPool;

use crate::{error::AppResult, models::League};

/// Repository for league database operations
pub struct LeagueRepository;

impl LeagueRepository {
    /// Create a new league
    pub async fn create(
        pool: &PgPool,
        name: &str,
        country: &str,
        slug: &str,
        logo_url: Option<&str>,
    ) -> AppResult<League> {
        let league = sqlx::query_as::<_, League>(
            r#"
            INSERT INTO leagues (name, country, slug, logo_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(country)
        .bind(slug)
        .bind(logo_url)
        .fetch_one(pool)
        .await?;

        Ok(league)
    }

    /// Find league by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<League>> {
        let league = sqlx::query_as::<_, League>(r#"SELECT * FROM leagues WHERE league_id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(league)
    }

    /// List all leagues ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<League>> {
        let leagues = sqlx::query_as::<_, League>(r#"SELECT * FROM leagues ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(leagues)
    }

    /// Update a league (absent fields left untouched)
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        country: Option<&str>,
        slug: Option<&str>,
        logo_url: Option<&str>,
    ) -> AppResult<League> {
        let league = sqlx::query_as::<_, League>(
            r#"
            UPDATE leagues
            SET
                name = COALESCE($2, name),
                country = COALESCE($3, country),
                slug = COALESCE($4, slug),
                logo_url = COALESCE($5, logo_url),
                updated_at = NOW()
            WHERE league_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(country)
        .bind(slug)
        .bind(logo_url)
        .fetch_one(pool)
        .await?;

        Ok(league)
    }

    /// Delete a league
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM leagues WHERE league_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
