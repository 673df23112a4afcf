//! League model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// League database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct League {
    pub league_id: i64,
    pub name: String,
    pub country: String,
    /// URL-safe identifier generated from the name
    pub slug: String,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
