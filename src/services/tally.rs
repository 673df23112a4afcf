//! Vote tally arithmetic
//!
//! Pure functions shared by the aggregation engine. Everything here operates
//! on in-memory counts so it can be exercised without a database.

use serde::{Deserialize, Serialize};

use crate::models::Winner;

/// Vote counts for the three outcome buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub home: i64,
    pub draw: i64,
    pub away: i64,
}

impl VoteTally {
    /// Tally outcome-vote ledger rows (one vote per row)
    pub fn from_winners<'a, I>(winners: I) -> VoteTally
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = VoteTally::default();
        for raw in winners {
            // Rows that fail to parse are skipped rather than failing the
            // whole recompute; the ledger write path validates on entry.
            if let Some(winner) = Winner::parse(raw) {
                tally.add(winner, 1);
            }
        }
        tally
    }

    /// Tally score-prediction ledger rows: each row contributes its running
    /// `vote_count` to the bucket implied by the scoreline
    pub fn from_score_rows<I>(rows: I) -> VoteTally
    where
        I: IntoIterator<Item = (i32, i32, i64)>,
    {
        let mut tally = VoteTally::default();
        for (home_score, away_score, vote_count) in rows {
            tally.add(Winner::from_scoreline(home_score, away_score), vote_count.max(0));
        }
        tally
    }

    pub fn add(&mut self, winner: Winner, weight: i64) {
        match winner {
            Winner::Home => self.home += weight,
            Winner::Draw => self.draw += weight,
            Winner::Away => self.away += weight,
        }
    }

    pub fn total(&self) -> i64 {
        self.home + self.draw + self.away
    }

    /// Sum two tallies field by field
    pub fn combine(&self, other: &VoteTally) -> VoteTally {
        VoteTally {
            home: self.home + other.home,
            draw: self.draw + other.draw,
            away: self.away + other.away,
        }
    }
}

/// Integer percentages for the three buckets, summing to exactly 100
/// whenever any votes exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotePercentages {
    pub home: i64,
    pub draw: i64,
    pub away: i64,
}

/// Derive display percentages from a tally.
///
/// Each bucket is rounded to the nearest integer independently; any shortfall
/// or excess against 100 is then assigned to the bucket holding the most
/// votes, with ties broken in the order home, away, draw. A zero-vote tally
/// yields all zeros with no correction.
pub fn percentages(tally: &VoteTally) -> VotePercentages {
    let total = tally.total();
    if total == 0 {
        return VotePercentages::default();
    }

    let round = |votes: i64| ((votes as f64) * 100.0 / (total as f64)).round() as i64;
    let mut pct = VotePercentages {
        home: round(tally.home),
        draw: round(tally.draw),
        away: round(tally.away),
    };

    let drift = 100 - (pct.home + pct.draw + pct.away);
    if drift != 0 {
        // Tie-break order is home, away, draw.
        if tally.home >= tally.away && tally.home >= tally.draw {
            pct.home += drift;
        } else if tally.away >= tally.draw {
            pct.away += drift;
        } else {
            pct.draw += drift;
        }
    }

    pct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_from_winners() {
        let tally = VoteTally::from_winners(["Home", "Draw", "Home", "Away", "bogus"]);
        assert_eq!(tally, VoteTally { home: 2, draw: 1, away: 1 });
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_tally_from_score_rows() {
        // (2,1)x3 -> Home, (0,0)x2 -> Draw, (0,1)x5 -> Away
        let tally = VoteTally::from_score_rows([(2, 1, 3), (0, 0, 2), (0, 1, 5)]);
        assert_eq!(tally, VoteTally { home: 3, draw: 2, away: 5 });
    }

    #[test]
    fn test_tally_from_score_rows_ignores_negative_counts() {
        let tally = VoteTally::from_score_rows([(1, 0, -4), (0, 1, 2)]);
        assert_eq!(tally, VoteTally { home: 0, draw: 0, away: 2 });
    }

    #[test]
    fn test_combine() {
        let user = VoteTally { home: 1, draw: 2, away: 0 };
        let admin = VoteTally { home: 3, draw: 0, away: 1 };
        assert_eq!(user.combine(&admin), VoteTally { home: 4, draw: 2, away: 1 });
    }

    #[test]
    fn test_percentages_exact_split_needs_no_correction() {
        // 3/1/1 of 5 -> 60/20/20, already 100
        let pct = percentages(&VoteTally { home: 3, draw: 1, away: 1 });
        assert_eq!(pct, VotePercentages { home: 60, draw: 20, away: 20 });
    }

    #[test]
    fn test_percentages_three_way_tie_corrects_home() {
        // 33+33+33 = 99; the missing point goes to home, first in tie order
        let pct = percentages(&VoteTally { home: 1, draw: 1, away: 1 });
        assert_eq!(pct, VotePercentages { home: 34, draw: 33, away: 33 });
    }

    #[test]
    fn test_percentages_two_one_zero() {
        // 66.7 -> 67, 33.3 -> 33, 0 -> 0
        let pct = percentages(&VoteTally { home: 2, draw: 1, away: 0 });
        assert_eq!(pct, VotePercentages { home: 67, draw: 33, away: 0 });
    }

    #[test]
    fn test_percentages_away_draw_tie_prefers_away() {
        // 0/1/1: draw and away tie at 50 each, sum is 100 so no correction;
        // force drift with 1/2/2: 20+40+40 = 100, still none. Use 1/1/5:
        // 14+14+71 = 99, away holds the most votes and takes the point.
        let pct = percentages(&VoteTally { home: 1, draw: 1, away: 5 });
        assert_eq!(pct.home + pct.draw + pct.away, 100);
        assert_eq!(pct, VotePercentages { home: 14, draw: 14, away: 72 });
    }

    #[test]
    fn test_percentages_zero_votes() {
        let pct = percentages(&VoteTally::default());
        assert_eq!(pct, VotePercentages::default());
    }

    #[test]
    fn test_percentages_always_sum_to_hundred() {
        for home in 0..12 {
            for draw in 0..12 {
                for away in 0..12 {
                    let tally = VoteTally { home, draw, away };
                    let pct = percentages(&tally);
                    let sum = pct.home + pct.draw + pct.away;
                    if tally.total() == 0 {
                        assert_eq!(sum, 0);
                    } else {
                        assert_eq!(sum, 100, "failed for {tally:?}");
                    }
                }
            }
        }
    }
}
