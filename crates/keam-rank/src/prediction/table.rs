/// Size of the ranked candidate pool; the worst rank an applicant can hold.
pub const TOTAL_CANDIDATES: u32 = 86_000;

/// Observed index score and the rank it earned in the reference year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAnchor {
    pub index: f64,
    pub rank: u32,
}

impl ScoreAnchor {
    pub const fn new(index: f64, rank: u32) -> Self {
        Self { index, rank }
    }
}

const KEAM_ANCHORS: [ScoreAnchor; 14] = [
    ScoreAnchor::new(590.0, 1),
    ScoreAnchor::new(560.0, 100),
    ScoreAnchor::new(530.0, 500),
    ScoreAnchor::new(500.0, 1_500),
    ScoreAnchor::new(470.0, 3_000),
    ScoreAnchor::new(440.0, 5_000),
    ScoreAnchor::new(410.0, 10_000),
    ScoreAnchor::new(370.0, 20_000),
    ScoreAnchor::new(330.0, 30_000),
    ScoreAnchor::new(290.0, 40_000),
    ScoreAnchor::new(250.0, 50_000),
    ScoreAnchor::new(200.0, 65_000),
    ScoreAnchor::new(150.0, 80_000),
    ScoreAnchor::new(100.0, TOTAL_CANDIDATES),
];

/// Anchors ordered by descending index score. Ranks rise as scores fall.
#[derive(Debug, Clone, Copy)]
pub struct HistoricalScoreTable {
    anchors: &'static [ScoreAnchor],
}

impl HistoricalScoreTable {
    /// 2024 index-to-rank mapping; the topper sat near 590.
    pub const fn keam() -> Self {
        Self {
            anchors: &KEAM_ANCHORS,
        }
    }

    pub fn anchors(&self) -> &'static [ScoreAnchor] {
        self.anchors
    }

    pub fn top(&self) -> ScoreAnchor {
        self.anchors[0]
    }

    pub fn bottom(&self) -> ScoreAnchor {
        self.anchors[self.anchors.len() - 1]
    }

    /// Adjacent `(higher, lower)` anchor pairs in table order.
    pub fn brackets(&self) -> impl Iterator<Item = (ScoreAnchor, ScoreAnchor)> + '_ {
        self.anchors.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
