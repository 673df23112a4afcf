//! Domain models and database row types

pub mod comment;
pub mod league;
pub mod matches;
pub mod team;
pub mod user;
pub mod vote;

pub use comment::{Comment, CommentReaction, CommentWithCounts};
pub use league::League;
pub use matches::{Match, MatchWithDetails};
pub use team::Team;
pub use user::User;
pub use vote::{
    MatchOutcome, MatchVoteCounts, OutcomeVote, ScorePrediction, UserScorePick, VoterClass, Winner,
};
