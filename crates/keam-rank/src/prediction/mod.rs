mod composer;
mod estimator;
mod table;

pub use composer::{CandidateScores, ScoreComposer, SUBJECT_CEILING};
pub use estimator::{RankEstimator, RankRange, RANK_MARGIN};
pub use table::{HistoricalScoreTable, ScoreAnchor, TOTAL_CANDIDATES};

use crate::config::PredictionConfig;
use serde::Serialize;

/// Stateless pipeline from raw marks to a widened rank estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankPredictor {
    composer: ScoreComposer,
    estimator: RankEstimator,
}

impl RankPredictor {
    pub fn new(composer: ScoreComposer, estimator: RankEstimator) -> Self {
        Self {
            composer,
            estimator,
        }
    }

    pub fn from_config(config: &PredictionConfig) -> Self {
        Self::new(
            ScoreComposer::new(config.subject_ceiling),
            RankEstimator::new(HistoricalScoreTable::keam(), config.rank_margin),
        )
    }

    pub fn composer(&self) -> &ScoreComposer {
        &self.composer
    }

    pub fn estimator(&self) -> &RankEstimator {
        &self.estimator
    }

    pub fn predict(&self, scores: &CandidateScores) -> RankPrediction {
        let index_score = self.composer.compose(scores);
        let point_rank = self.estimator.point_rank(index_score);
        RankPrediction {
            index_score,
            point_rank,
            range: self.estimator.widen(point_rank),
        }
    }
}

/// Full-precision result of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankPrediction {
    pub index_score: f64,
    pub point_rank: u32,
    pub range: RankRange,
}

impl RankPrediction {
    pub fn view(&self) -> RankPredictionView {
        RankPredictionView {
            final_index_score: round_to_hundredths(self.index_score),
            estimated_rank_range: self.range,
        }
    }
}

/// Response body handed to API and CLI consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankPredictionView {
    #[serde(serialize_with = "serialize_score")]
    pub final_index_score: f64,
    pub estimated_rank_range: RankRange,
}

/// Half-up rounding to two decimals, applied only at the output boundary.
///
/// Compares the exact fractional part against one half; adding 0.5 before
/// flooring would round values one ulp below a tie upward.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    let whole = scaled.floor();
    let rounded = if scaled - whole >= 0.5 { whole + 1.0 } else { whole };
    rounded / 100.0
}

/// Whole scores go out as integers, e.g. `305` rather than `305.0`.
fn serialize_score<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
