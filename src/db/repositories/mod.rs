//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod comment_repo;
pub mod league_repo;
pub mod match_repo;
pub mod team_repo;
pub mod user_repo;
pub mod vote_repo;

pub use comment_repo::CommentRepository;
pub use league_repo::LeagueRepository;
pub use match_repo::MatchRepository;
pub use team_repo::TeamRepository;
pub use user_repo::UserRepository;
pub use vote_repo::VoteRepository;
