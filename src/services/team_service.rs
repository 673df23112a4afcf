//! Team service

use sqlx::PgPool;

use crate::{
    db::repositories::TeamRepository,
    error::{AppError, AppResult},
    models::Team,
    utils::validation,
};

/// Team service for business logic
pub struct TeamService;

impl TeamService {
    pub async fn create(
        pool: &PgPool,
        name: &str,
        short_code: &str,
        country: &str,
        team_type: &str,
        logo_url: Option<&str>,
    ) -> AppResult<Team> {
        validation::validate_team_type(team_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        TeamRepository::create(pool, name, short_code, country, team_type, logo_url).await
    }

    pub async fn get(pool: &PgPool, id: i64) -> AppResult<Team> {
        TeamRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Team>> {
        TeamRepository::list(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        short_code: Option<&str>,
        country: Option<&str>,
        team_type: Option<&str>,
        logo_url: Option<&str>,
    ) -> AppResult<Team> {
        if let Some(team_type) = team_type {
            validation::validate_team_type(team_type)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        Self::get(pool, id).await?;
        TeamRepository::update(pool, id, name, short_code, country, team_type, logo_url).await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        Self::get(pool, id).await?;
        TeamRepository::delete(pool, id).await
    }
}
