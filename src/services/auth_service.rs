//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::Config,
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::validation,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// user_id
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        name: &str,
        email: &str,
        password: &str,
        avatar_url: Option<&str>,
        favorite_team_id: Option<i64>,
    ) -> AppResult<User> {
        validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_password(password).map_err(|e| AppError::Validation(e.to_string()))?;

        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = Self::hash_password(password)?;

        let user = UserRepository::create(
            pool,
            name,
            email,
            &password_hash,
            roles::USER,
            avatar_url,
            favorite_team_id,
        )
        .await?;

        Ok(user)
    }

    /// Login with email and password; returns the user and a signed token
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        UserRepository::update_last_login(pool, user.user_id).await?;

        let token = Self::generate_token(&user, &config.jwt.secret, config.jwt.expiry_hours)?;

        Ok((user, token))
    }

    /// Hash a password with Argon2id
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verify a password against its stored hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Generate a signed JWT for a user
    pub fn generate_token(user: &User, secret: &str, expiry_hours: i64) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.user_id.to_string(),
            email: user.email.clone(),
            role: user.role.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify a JWT and return its claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            user_id: 7,
            name: "Test Fan".to_string(),
            email: "fan@example.com".to_string(),
            password_hash: String::new(),
            role: roles::USER.to_string(),
            avatar_url: None,
            favorite_team_id: None,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = AuthService::hash_password("correct horse").unwrap();
        assert!(AuthService::verify_password("correct horse", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_token_round_trip() {
        let user = test_user();
        let token = AuthService::generate_token(&user, "test-secret", 1).unwrap();
        let claims = AuthService::verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "fan@example.com");
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let user = test_user();
        let token = AuthService::generate_token(&user, "test-secret", 1).unwrap();
        assert!(AuthService::verify_token(&token, "other-secret").is_err());
    }
}
