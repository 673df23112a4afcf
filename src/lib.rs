//! GoalPoll - Football Prediction Backend
//!
//! REST API backend for a football-prediction application: leagues, teams,
//! matches, outcome and score predictions, and match comments, backed by
//! Postgres.
//!
//! The core is the vote-aggregation engine: two independently tracked vote
//! ledgers (regular users and an admin-set baseline) are merged into combined
//! counts with largest-remainder percentages, recomputed as a best-effort
//! side effect of every vote write.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
