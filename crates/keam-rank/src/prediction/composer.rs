use serde::{Deserialize, Serialize};

/// Three subjects at 100 marks each.
pub const SUBJECT_CEILING: f64 = 300.0;

/// Normalized entrance score plus the three qualifying subject marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScores {
    #[serde(rename = "keam_normalized_score")]
    pub normalized_score: f64,
    pub maths: f64,
    pub physics: f64,
    pub chemistry: f64,
}

impl CandidateScores {
    pub fn subject_total(&self) -> f64 {
        self.maths + self.physics + self.chemistry
    }
}

/// Folds the entrance score and capped subject total into one index score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreComposer {
    subject_ceiling: f64,
}

impl ScoreComposer {
    pub fn new(subject_ceiling: f64) -> Self {
        Self { subject_ceiling }
    }

    pub fn subject_ceiling(&self) -> f64 {
        self.subject_ceiling
    }

    /// Unrounded; callers round only when surfacing the value.
    pub fn compose(&self, scores: &CandidateScores) -> f64 {
        let capped = scores.subject_total().min(self.subject_ceiling);
        scores.normalized_score + capped
    }
}

impl Default for ScoreComposer {
    fn default() -> Self {
        Self::new(SUBJECT_CEILING)
    }
}
