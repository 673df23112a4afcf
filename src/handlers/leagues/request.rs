//! League request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create league request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeagueRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub country: String,

    pub logo_url: Option<String>,
}

/// Update league request (partial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLeagueRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub country: Option<String>,

    pub logo_url: Option<String>,
}
