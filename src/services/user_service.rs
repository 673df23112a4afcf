//! User service
//!
//! Admin-facing user management. Self-service registration and login live in
//! the auth service.

use sqlx::PgPool;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::auth_service::AuthService,
    utils::validation,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Create a user with an explicit role
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
        avatar_url: Option<&str>,
        favorite_team_id: Option<i64>,
    ) -> AppResult<User> {
        validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_password(password).map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;

        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = AuthService::hash_password(password)?;

        UserRepository::create(pool, name, email, &password_hash, role, avatar_url, favorite_team_id)
            .await
    }

    pub async fn get(pool: &PgPool, id: i64) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::list(pool).await
    }

    /// Update a user; a supplied password is re-hashed before storage
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        role: Option<&str>,
        avatar_url: Option<&str>,
        favorite_team_id: Option<i64>,
    ) -> AppResult<User> {
        if let Some(email) = email {
            validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(role) = role {
            validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let password_hash = match password {
            Some(password) => {
                validation::validate_password(password)
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                Some(AuthService::hash_password(password)?)
            }
            None => None,
        };

        Self::get(pool, id).await?;

        UserRepository::update(
            pool,
            id,
            name,
            email,
            password_hash.as_deref(),
            role,
            avatar_url,
            favorite_team_id,
        )
        .await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        Self::get(pool, id).await?;
        UserRepository::delete(pool, id).await
    }
}
