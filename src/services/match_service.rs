//! Match service

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use crate::{
    constants::{match_status, match_types},
    db::repositories::{MatchRepository, VoteRepository},
    error::{AppError, AppResult},
    handlers::matches::request::{CreateMatchRequest, UpdateMatchRequest},
    models::{Match, MatchWithDetails},
    utils::validation,
};

/// Editorial outcome probabilities view; absent rows read as all zeros
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeProbabilities {
    pub match_id: i64,
    pub home_win_prob: f64,
    pub draw_prob: f64,
    pub away_win_prob: f64,
}

/// Match service for business logic
pub struct MatchService;

impl MatchService {
    pub async fn create(pool: &PgPool, payload: CreateMatchRequest) -> AppResult<Match> {
        let status = payload.status.unwrap_or_else(|| match_status::SCHEDULED.to_string());
        let match_type = payload.match_type.unwrap_or_else(|| match_types::NORMAL.to_string());

        validation::validate_match_status(&status)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_match_type(&match_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        MatchRepository::create(
            pool,
            payload.league_id,
            payload.home_team_id,
            payload.away_team_id,
            payload.match_date,
            &payload.venue,
            &status,
            payload.home_score,
            payload.away_score,
            payload.allow_draw.unwrap_or(true),
            payload.match_timezone.as_deref().unwrap_or("UTC"),
            payload.big_match.unwrap_or(false),
            payload.derby.unwrap_or(false),
            &match_type,
            payload.published.unwrap_or(false),
        )
        .await
    }

    pub async fn get(pool: &PgPool, id: i64) -> AppResult<MatchWithDetails> {
        MatchRepository::find_with_details(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Match not found".to_string()))
    }

    /// Cheap existence check for endpoints that only need to 404 on a bad ID
    pub async fn ensure_exists(pool: &PgPool, id: i64) -> AppResult<()> {
        if !MatchRepository::exists(pool, id).await? {
            return Err(AppError::NotFound("Match not found".to_string()));
        }
        Ok(())
    }

    pub async fn list(
        pool: &PgPool,
        league_id: Option<i64>,
        date: Option<NaiveDate>,
        status: Option<&str>,
    ) -> AppResult<Vec<MatchWithDetails>> {
        if let Some(status) = status {
            validation::validate_match_status(status)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        MatchRepository::list(pool, league_id, date, status).await
    }

    pub async fn update(pool: &PgPool, id: i64, payload: UpdateMatchRequest) -> AppResult<Match> {
        if let Some(status) = payload.status.as_deref() {
            validation::validate_match_status(status)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(match_type) = payload.match_type.as_deref() {
            validation::validate_match_type(match_type)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        if MatchRepository::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::NotFound("Match not found".to_string()));
        }

        MatchRepository::update(
            pool,
            id,
            payload.league_id,
            payload.home_team_id,
            payload.away_team_id,
            payload.match_date,
            payload.venue.as_deref(),
            payload.status.as_deref(),
            payload.home_score,
            payload.away_score,
            payload.allow_draw,
            payload.match_timezone.as_deref(),
            payload.big_match,
            payload.derby,
            payload.match_type.as_deref(),
            payload.published,
        )
        .await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        if MatchRepository::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::NotFound("Match not found".to_string()));
        }

        MatchRepository::delete(pool, id).await
    }

    /// Editorial outcome probabilities; a match with none recorded reads as zeros
    pub async fn outcome_probabilities(pool: &PgPool, match_id: i64) -> AppResult<OutcomeProbabilities> {
        let outcome = VoteRepository::find_outcome(pool, match_id).await?;

        Ok(match outcome {
            Some(o) => OutcomeProbabilities {
                match_id,
                home_win_prob: o.home_win_prob,
                draw_prob: o.draw_prob,
                away_win_prob: o.away_win_prob,
            },
            None => OutcomeProbabilities {
                match_id,
                home_win_prob: 0.0,
                draw_prob: 0.0,
                away_win_prob: 0.0,
            },
        })
    }

    /// Create or replace the editorial outcome probabilities for a match
    pub async fn set_outcome_probabilities(
        pool: &PgPool,
        match_id: i64,
        home_win_prob: f64,
        draw_prob: f64,
        away_win_prob: f64,
    ) -> AppResult<OutcomeProbabilities> {
        for prob in [home_win_prob, draw_prob, away_win_prob] {
            if !(0.0..=100.0).contains(&prob) {
                return Err(AppError::Validation(
                    "Probabilities must be between 0 and 100".to_string(),
                ));
            }
        }

        let outcome =
            VoteRepository::upsert_outcome(pool, match_id, home_win_prob, draw_prob, away_win_prob)
                .await?;

        Ok(OutcomeProbabilities {
            match_id,
            home_win_prob: outcome.home_win_prob,
            draw_prob: outcome.draw_prob,
            away_win_prob: outcome.away_win_prob,
        })
    }
}
