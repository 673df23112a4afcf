//! League service

use sqlx::PgPool;

use crate::{
    db::repositories::LeagueRepository,
    error::{AppError, AppResult},
    models::League,
    utils::slug::generate_league_slug,
};

/// League service for business logic
pub struct LeagueService;

impl LeagueService {
    /// Create a league, generating its slug from name and country
    pub async fn create(
        pool: &PgPool,
        name: &str,
        country: &str,
        logo_url: Option<&str>,
    ) -> AppResult<League> {
        let slug = generate_league_slug(name, country);
        LeagueRepository::create(pool, name, country, &slug, logo_url).await
    }

    pub async fn get(pool: &PgPool, id: i64) -> AppResult<League> {
        LeagueRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("League not found".to_string()))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<League>> {
        LeagueRepository::list(pool).await
    }

    /// Update a league; a changed name or country regenerates the slug
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        country: Option<&str>,
        logo_url: Option<&str>,
    ) -> AppResult<League> {
        let existing = Self::get(pool, id).await?;

        let slug = if name.is_some() || country.is_some() {
            Some(generate_league_slug(
                name.unwrap_or(&existing.name),
                country.unwrap_or(&existing.country),
            ))
        } else {
            None
        };

        LeagueRepository::update(pool, id, name, country, slug.as_deref(), logo_url).await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        Self::get(pool, id).await?;
        LeagueRepository::delete(pool, id).await
    }
}
