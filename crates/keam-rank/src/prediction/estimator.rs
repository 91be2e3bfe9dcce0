use serde::{Deserialize, Serialize};

use super::table::{HistoricalScoreTable, TOTAL_CANDIDATES};

/// Rank positions added on each side of the point estimate.
pub const RANK_MARGIN: u32 = 50;

/// Inclusive rank bracket, always within `[1, total_candidates]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRange {
    pub min_rank: u32,
    pub max_rank: u32,
}

/// Maps index scores onto the historical table and widens the result.
#[derive(Debug, Clone, Copy)]
pub struct RankEstimator {
    table: HistoricalScoreTable,
    total_candidates: u32,
    margin: u32,
}

impl RankEstimator {
    pub fn new(table: HistoricalScoreTable, margin: u32) -> Self {
        Self {
            table,
            total_candidates: TOTAL_CANDIDATES,
            margin,
        }
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Linear interpolation between the two anchors bracketing `index`.
    ///
    /// Scores at or above the top anchor rank first. Scores below the last
    /// anchor saturate at the full candidate pool instead of extrapolating.
    pub fn point_rank(&self, index: f64) -> u32 {
        if index >= self.table.top().index {
            return 1;
        }

        for (upper, lower) in self.table.brackets() {
            if index >= lower.index && index < upper.index {
                let ratio = (index - lower.index) / (upper.index - lower.index);
                let spread = f64::from(upper.rank) - f64::from(lower.rank);
                return (f64::from(lower.rank) + ratio * spread).floor() as u32;
            }
        }

        self.total_candidates
    }

    pub fn estimate(&self, index: f64) -> RankRange {
        self.widen(self.point_rank(index))
    }

    pub(crate) fn widen(&self, point_rank: u32) -> RankRange {
        RankRange {
            min_rank: point_rank.saturating_sub(self.margin).max(1),
            max_rank: point_rank
                .saturating_add(self.margin)
                .min(self.total_candidates),
        }
    }
}

impl Default for RankEstimator {
    fn default() -> Self {
        Self::new(HistoricalScoreTable::keam(), RANK_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_anchor_and_above_rank_first() {
        let estimator = RankEstimator::default();
        assert_eq!(estimator.point_rank(590.0), 1);
        assert_eq!(estimator.point_rank(612.5), 1);
    }

    #[test]
    fn exact_anchor_scores_return_tabulated_rank() {
        let estimator = RankEstimator::default();
        for anchor in HistoricalScoreTable::keam().anchors() {
            assert_eq!(
                estimator.point_rank(anchor.index),
                anchor.rank,
                "anchor at {}",
                anchor.index
            );
        }
    }

    #[test]
    fn interpolates_within_bracket_and_floors() {
        let estimator = RankEstimator::default();
        // 305 sits 15/40 of the way from 290 (40000) up to 330 (30000).
        assert_eq!(estimator.point_rank(305.0), 36_250);
        // 575 is halfway between 560 (100) and 590 (1): 50.5 floors to 50.
        assert_eq!(estimator.point_rank(575.0), 50);
    }

    #[test]
    fn scores_below_table_saturate_at_pool_size() {
        let estimator = RankEstimator::default();
        assert_eq!(estimator.point_rank(50.0), TOTAL_CANDIDATES);
        assert_eq!(estimator.point_rank(-20.0), TOTAL_CANDIDATES);
    }

    #[test]
    fn range_is_point_rank_plus_minus_margin() {
        let estimator = RankEstimator::default();
        assert_eq!(
            estimator.estimate(305.0),
            RankRange {
                min_rank: 36_200,
                max_rank: 36_300,
            }
        );
    }

    #[test]
    fn range_clamps_to_rank_domain() {
        let estimator = RankEstimator::default();
        assert_eq!(
            estimator.estimate(600.0),
            RankRange {
                min_rank: 1,
                max_rank: 51,
            }
        );
        assert_eq!(
            estimator.estimate(50.0),
            RankRange {
                min_rank: 85_950,
                max_rank: TOTAL_CANDIDATES,
            }
        );
    }

    #[test]
    fn zero_margin_collapses_range() {
        let estimator = RankEstimator::new(HistoricalScoreTable::keam(), 0);
        let range = estimator.estimate(440.0);
        assert_eq!(range.min_rank, 5_000);
        assert_eq!(range.max_rank, 5_000);
    }
}
