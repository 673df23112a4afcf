//! User management request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create user request (admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub password: String,

    /// user, admin, or seed
    pub role: String,

    pub avatar_url: Option<String>,

    pub favorite_team_id: Option<i64>,
}

/// Update user request (admin, partial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub password: Option<String>,
    pub role: Option<String>,
    pub avatar_url: Option<String>,
    pub favorite_team_id: Option<i64>,
}
