//! Vote aggregation engine
//!
//! Keeps the per-match cached vote-count rows consistent with the two vote
//! ledgers (user votes and the admin baseline) and presents the combined,
//! percentage-annotated view to readers.
//!
//! Recomputes always derive from full ledger state, never incrementally, so
//! the cache can be rebuilt at any time by re-running them. Callers on the
//! vote-write path treat recompute failure as non-fatal: the vote is already
//! recorded, the stale cache is logged and left behind.

use serde::Serialize;
use sqlx::PgPool;

use crate::{
    db::repositories::VoteRepository,
    error::{AppError, AppResult},
    models::{MatchVoteCounts, OutcomeVote, ScorePrediction, VoterClass, Winner},
    services::tally::{self, VoteTally},
};

/// Per-class slice of the combined read view
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ClassBreakdown {
    pub home_votes: i64,
    pub draw_votes: i64,
    pub away_votes: i64,
    pub total_votes: i64,
}

impl From<&MatchVoteCounts> for ClassBreakdown {
    fn from(counts: &MatchVoteCounts) -> Self {
        Self {
            home_votes: counts.home_votes,
            draw_votes: counts.draw_votes,
            away_votes: counts.away_votes,
            total_votes: counts.total_votes,
        }
    }
}

impl ClassBreakdown {
    fn tally(&self) -> VoteTally {
        VoteTally {
            home: self.home_votes,
            draw: self.draw_votes,
            away: self.away_votes,
        }
    }
}

/// Combined standings for a match: summed counts, display percentages, and
/// the per-class breakdown they were derived from
#[derive(Debug, Clone, Serialize)]
pub struct CombinedVoteCounts {
    pub match_id: i64,
    pub home_votes: i64,
    pub draw_votes: i64,
    pub away_votes: i64,
    pub total_votes: i64,
    pub home_percentage: i64,
    pub draw_percentage: i64,
    pub away_percentage: i64,
    pub user: ClassBreakdown,
    pub admin: ClassBreakdown,
}

/// Result of casting an outcome vote
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeVoteResult {
    #[serde(flatten)]
    pub vote: OutcomeVote,
    #[serde(skip)]
    pub updated_existing: bool,
}

/// Result of casting a score vote
#[derive(Debug, Clone, Serialize)]
pub struct ScoreVoteResult {
    #[serde(flatten)]
    pub prediction: ScorePrediction,
    #[serde(skip)]
    pub unchanged: bool,
}

/// Ledger write implied by an incoming outcome vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutcomeWrite {
    /// Change the voter's existing row in place; the ledger gains no row
    Update { vote_id: i64 },
    /// Append a new ledger row
    Insert,
}

/// User votes are one-per-match: an existing row is updated in place, so a
/// re-vote (same pick or not) never grows the ledger. Admin baseline votes
/// always append.
fn plan_outcome_write(class: VoterClass, existing: Option<&OutcomeVote>) -> OutcomeWrite {
    match (class, existing) {
        (VoterClass::User, Some(vote)) => OutcomeWrite::Update { vote_id: vote.vote_id },
        _ => OutcomeWrite::Insert,
    }
}

/// How a user's score vote lands on the pre-aggregated scoreline ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScorePickMove {
    /// Same scoreline as the current pick: no ledger writes at all
    Unchanged,
    /// No prior pick: bump the new scoreline only
    First,
    /// Pick changed: decrement the old scoreline, bump the new one
    Moved { from: (i32, i32) },
}

fn plan_score_pick(previous: Option<(i32, i32)>, next: (i32, i32)) -> ScorePickMove {
    match previous {
        Some(prev) if prev == next => ScorePickMove::Unchanged,
        Some(prev) => ScorePickMove::Moved { from: prev },
        None => ScorePickMove::First,
    }
}

/// Vote aggregation service
pub struct VoteService;

impl VoteService {
    // =========================================================================
    // Recomputes
    // =========================================================================

    /// Rebuild the cached outcome-vote aggregates for a match from the ledger.
    ///
    /// Both class rows are recomputed inside one transaction so concurrent
    /// voters cannot interleave a stale read between the two writes.
    pub async fn recompute_outcome_counts(
        pool: &PgPool,
        match_id: i64,
    ) -> AppResult<(MatchVoteCounts, MatchVoteCounts)> {
        let mut tx = pool.begin().await?;

        let user_winners =
            VoteRepository::list_winners(&mut *tx, match_id, VoterClass::User).await?;
        let admin_winners =
            VoteRepository::list_winners(&mut *tx, match_id, VoterClass::Admin).await?;

        let user_tally = VoteTally::from_winners(user_winners.iter().map(String::as_str));
        let admin_tally = VoteTally::from_winners(admin_winners.iter().map(String::as_str));

        let user_counts =
            Self::write_counts(&mut tx, match_id, VoterClass::User, &user_tally).await?;
        let admin_counts =
            Self::write_counts(&mut tx, match_id, VoterClass::Admin, &admin_tally).await?;

        tx.commit().await?;

        Ok((user_counts, admin_counts))
    }

    /// Rebuild the cached aggregates for a match from the score-prediction
    /// ledger. Each scoreline row contributes its running `vote_count` to the
    /// bucket implied by comparing the two scores.
    pub async fn recompute_score_counts(
        pool: &PgPool,
        match_id: i64,
    ) -> AppResult<(MatchVoteCounts, MatchVoteCounts)> {
        let mut tx = pool.begin().await?;

        let user_rows =
            VoteRepository::list_score_rows(&mut *tx, match_id, VoterClass::User).await?;
        let admin_rows =
            VoteRepository::list_score_rows(&mut *tx, match_id, VoterClass::Admin).await?;

        let user_tally = VoteTally::from_score_rows(
            user_rows.iter().map(|r| (r.home_score, r.away_score, r.vote_count)),
        );
        let admin_tally = VoteTally::from_score_rows(
            admin_rows.iter().map(|r| (r.home_score, r.away_score, r.vote_count)),
        );

        let user_counts =
            Self::write_counts(&mut tx, match_id, VoterClass::User, &user_tally).await?;
        let admin_counts =
            Self::write_counts(&mut tx, match_id, VoterClass::Admin, &admin_tally).await?;

        tx.commit().await?;

        Ok((user_counts, admin_counts))
    }

    async fn write_counts(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        match_id: i64,
        class: VoterClass,
        tally: &VoteTally,
    ) -> AppResult<MatchVoteCounts> {
        VoteRepository::upsert_counts(
            &mut **tx,
            match_id,
            class,
            tally.home,
            tally.draw,
            tally.away,
            tally.total(),
        )
        .await
    }

    /// Best-effort aggregate refresh after a ledger write. Failure is logged
    /// and swallowed; the vote itself has already committed.
    async fn refresh_outcome_counts(pool: &PgPool, match_id: i64) {
        if let Err(e) = Self::recompute_outcome_counts(pool, match_id).await {
            tracing::warn!(match_id, error = %e, "failed to refresh vote counts after write");
        }
    }

    async fn refresh_score_counts(pool: &PgPool, match_id: i64) {
        if let Err(e) = Self::recompute_score_counts(pool, match_id).await {
            tracing::warn!(match_id, error = %e, "failed to refresh score vote counts after write");
        }
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// Combined standings for a match from the cached aggregates only.
    /// Absent rows count as zero; no recompute happens on read.
    pub async fn combined_vote_counts(pool: &PgPool, match_id: i64) -> AppResult<CombinedVoteCounts> {
        let user = VoteRepository::find_counts(pool, match_id, VoterClass::User)
            .await?
            .as_ref()
            .map(ClassBreakdown::from)
            .unwrap_or_default();
        let admin = VoteRepository::find_counts(pool, match_id, VoterClass::Admin)
            .await?
            .as_ref()
            .map(ClassBreakdown::from)
            .unwrap_or_default();

        let combined = user.tally().combine(&admin.tally());
        let pct = tally::percentages(&combined);

        Ok(CombinedVoteCounts {
            match_id,
            home_votes: combined.home,
            draw_votes: combined.draw,
            away_votes: combined.away,
            total_votes: combined.total(),
            home_percentage: pct.home,
            draw_percentage: pct.draw,
            away_percentage: pct.away,
            user,
            admin,
        })
    }

    // =========================================================================
    // Outcome votes
    // =========================================================================

    /// Cast an outcome vote.
    ///
    /// User votes are upsert-by-voter: one active vote per match, a re-vote
    /// changes the pick in place. Admin votes always insert a new baseline
    /// row.
    pub async fn vote_outcome(
        pool: &PgPool,
        match_id: i64,
        voter_id: i64,
        class: VoterClass,
        winner: Winner,
    ) -> AppResult<OutcomeVoteResult> {
        let existing = match class {
            VoterClass::User => {
                VoteRepository::find_vote_by_voter(pool, match_id, voter_id, class).await?
            }
            VoterClass::Admin => None,
        };

        let (vote, updated_existing) = match plan_outcome_write(class, existing.as_ref()) {
            OutcomeWrite::Update { vote_id } => {
                let vote = VoteRepository::update_vote_pick(pool, vote_id, winner).await?;
                (vote, true)
            }
            OutcomeWrite::Insert => {
                let vote =
                    VoteRepository::insert_vote(pool, match_id, voter_id, class, winner).await?;
                (vote, false)
            }
        };

        Self::refresh_outcome_counts(pool, match_id).await;

        Ok(OutcomeVoteResult { vote, updated_existing })
    }

    /// Change an existing outcome vote's pick by ledger row ID
    pub async fn update_vote(pool: &PgPool, vote_id: i64, winner: Winner) -> AppResult<OutcomeVote> {
        let existing = VoteRepository::find_vote_by_id(pool, vote_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Prediction not found".to_string()))?;

        let vote = VoteRepository::update_vote_pick(pool, vote_id, winner).await?;

        Self::refresh_outcome_counts(pool, existing.match_id).await;

        Ok(vote)
    }

    /// Delete an outcome vote by ledger row ID
    pub async fn delete_vote(pool: &PgPool, vote_id: i64) -> AppResult<()> {
        let existing = VoteRepository::find_vote_by_id(pool, vote_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Prediction not found".to_string()))?;

        VoteRepository::delete_vote(pool, vote_id).await?;

        Self::refresh_outcome_counts(pool, existing.match_id).await;

        Ok(())
    }

    /// List outcome votes with optional filters
    pub async fn list_votes(
        pool: &PgPool,
        match_id: Option<i64>,
        voter_id: Option<i64>,
        class: Option<VoterClass>,
    ) -> AppResult<Vec<OutcomeVote>> {
        VoteRepository::list_votes(pool, match_id, voter_id, class).await
    }

    /// Fetch one outcome vote by ID
    pub async fn get_vote(pool: &PgPool, vote_id: i64) -> AppResult<OutcomeVote> {
        VoteRepository::find_vote_by_id(pool, vote_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Prediction not found".to_string()))
    }

    // =========================================================================
    // Score votes
    // =========================================================================

    /// Cast a user's score vote with one-active-pick-per-match exclusivity.
    ///
    /// Re-voting the identical scoreline is a no-op. A changed pick moves the
    /// user's vote: the old scoreline's count drops by one (floored at zero)
    /// and the new one gains or starts at one.
    pub async fn vote_score(
        pool: &PgPool,
        match_id: i64,
        user_id: i64,
        home_score: i32,
        away_score: i32,
    ) -> AppResult<ScoreVoteResult> {
        let previous = VoteRepository::find_pick(pool, match_id, user_id).await?;
        let plan = plan_score_pick(
            previous.map(|p| (p.home_score, p.away_score)),
            (home_score, away_score),
        );

        match plan {
            ScorePickMove::Unchanged => {
                // Idempotent re-vote: report the current row untouched.
                let row = VoteRepository::find_score_row(
                    pool,
                    match_id,
                    home_score,
                    away_score,
                    VoterClass::User,
                )
                .await?
                .ok_or_else(|| {
                    AppError::Database("score pick exists without a ledger row".to_string())
                })?;

                return Ok(ScoreVoteResult { prediction: row, unchanged: true });
            }
            ScorePickMove::Moved { from: (old_home, old_away) } => {
                VoteRepository::decrement_score_count(
                    pool,
                    match_id,
                    old_home,
                    old_away,
                    VoterClass::User,
                )
                .await?;
            }
            ScorePickMove::First => {}
        }

        let prediction = VoteRepository::bump_score_count(
            pool,
            match_id,
            home_score,
            away_score,
            VoterClass::User,
        )
        .await?;

        VoteRepository::upsert_pick(pool, match_id, user_id, home_score, away_score).await?;

        Self::refresh_score_counts(pool, match_id).await;

        Ok(ScoreVoteResult { prediction, unchanged: false })
    }

    /// Add an admin baseline vote for a scoreline. No exclusivity: every call
    /// adds one to the scoreline's count.
    pub async fn admin_vote_score(
        pool: &PgPool,
        match_id: i64,
        home_score: i32,
        away_score: i32,
    ) -> AppResult<ScorePrediction> {
        let prediction = VoteRepository::bump_score_count(
            pool,
            match_id,
            home_score,
            away_score,
            VoterClass::Admin,
        )
        .await?;

        Self::refresh_score_counts(pool, match_id).await;

        Ok(prediction)
    }

    /// Score predictions for a match, most popular first
    pub async fn list_score_predictions(
        pool: &PgPool,
        match_id: i64,
        class: Option<VoterClass>,
    ) -> AppResult<Vec<ScorePrediction>> {
        VoteRepository::list_score_predictions(pool, match_id, class).await
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Admin override of a match's baseline counts. Writes the admin-class
    /// aggregate row directly; the total is recomputed from the three buckets.
    pub async fn override_admin_counts(
        pool: &PgPool,
        match_id: i64,
        home_votes: i64,
        draw_votes: i64,
        away_votes: i64,
    ) -> AppResult<MatchVoteCounts> {
        let total = home_votes + draw_votes + away_votes;
        VoteRepository::upsert_counts(
            pool,
            match_id,
            VoterClass::Admin,
            home_votes,
            draw_votes,
            away_votes,
            total,
        )
        .await
    }

    /// Remove every vote in the system: both ledgers, all score picks, and
    /// zero out every cached aggregate
    pub async fn remove_all_votes(pool: &PgPool) -> AppResult<()> {
        VoteRepository::clear_outcome_votes(pool).await?;
        VoteRepository::clear_score_predictions(pool).await?;
        VoteRepository::clear_score_picks(pool).await?;
        VoteRepository::reset_all_counts(pool).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Utc;

    use super::*;

    fn ledger_row(vote_id: i64, winner: Winner) -> OutcomeVote {
        let now = Utc::now();
        OutcomeVote {
            vote_id,
            match_id: 10,
            voter_id: 7,
            voter_class: VoterClass::User.as_str().to_string(),
            predicted_winner: winner.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_user_revote_updates_in_place() {
        let existing = ledger_row(42, Winner::Home);

        // Same pick or not, a user with an existing vote never appends a row,
        // so re-voting the identical pick leaves the tallies unchanged.
        assert_eq!(
            plan_outcome_write(VoterClass::User, Some(&existing)),
            OutcomeWrite::Update { vote_id: 42 }
        );
    }

    #[test]
    fn test_first_user_vote_inserts() {
        assert_eq!(
            plan_outcome_write(VoterClass::User, None),
            OutcomeWrite::Insert
        );
    }

    #[test]
    fn test_admin_vote_always_inserts() {
        let existing = ledger_row(42, Winner::Draw);

        assert_eq!(
            plan_outcome_write(VoterClass::Admin, Some(&existing)),
            OutcomeWrite::Insert
        );
        assert_eq!(
            plan_outcome_write(VoterClass::Admin, None),
            OutcomeWrite::Insert
        );
    }

    #[test]
    fn test_same_scoreline_revote_is_a_no_op() {
        assert_eq!(
            plan_score_pick(Some((2, 1)), (2, 1)),
            ScorePickMove::Unchanged
        );
    }

    #[test]
    fn test_first_score_pick() {
        assert_eq!(plan_score_pick(None, (1, 0)), ScorePickMove::First);
    }

    #[test]
    fn test_changed_scoreline_moves_the_pick() {
        assert_eq!(
            plan_score_pick(Some((2, 1)), (1, 1)),
            ScorePickMove::Moved { from: (2, 1) }
        );
    }

    #[test]
    fn test_pick_move_keeps_ledger_total_constant() {
        // Scoreline counts as the ledger stores them. Applying the planned
        // move (old bucket down, floored at zero; new bucket up) must leave
        // the user's contribution to the total untouched.
        let mut counts: HashMap<(i32, i32), i64> = HashMap::from([((2, 1), 5), ((1, 1), 3)]);
        let before: i64 = counts.values().sum();

        let ScorePickMove::Moved { from } = plan_score_pick(Some((2, 1)), (1, 1)) else {
            panic!("changed scoreline must plan a move");
        };

        if let Some(old) = counts.get_mut(&from) {
            *old = (*old - 1).max(0);
        }
        *counts.entry((1, 1)).or_insert(0) += 1;

        assert_eq!(counts.values().sum::<i64>(), before);
        assert_eq!(counts[&(2, 1)], 4);
        assert_eq!(counts[&(1, 1)], 4);
    }
}
