//! Team request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_SHORT_CODE_LENGTH};

/// Create team request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_SHORT_CODE_LENGTH))]
    pub short_code: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub country: String,

    /// club or country
    pub team_type: String,

    pub logo_url: Option<String>,
}

/// Update team request (partial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = MAX_SHORT_CODE_LENGTH))]
    pub short_code: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub country: Option<String>,

    pub team_type: Option<String>,
    pub logo_url: Option<String>,
}
