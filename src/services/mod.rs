//! Business logic services
//!
//! Services sit between handlers and repositories: they validate input,
//! enforce domain rules, and orchestrate the vote ledgers and cached
//! aggregates.

pub mod auth_service;
pub mod comment_service;
pub mod league_service;
pub mod match_service;
pub mod tally;
pub mod team_service;
pub mod user_service;
pub mod vote_service;

pub use auth_service::AuthService;
pub use comment_service::CommentService;
pub use league_service::LeagueService;
pub use match_service::MatchService;
pub use team_service::TeamService;
pub use user_service::UserService;
pub use vote_service::VoteService;
