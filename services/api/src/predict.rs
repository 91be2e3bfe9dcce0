use crate::infra::parse_mark;
use clap::Args;
use keam_rank::config::AppConfig;
use keam_rank::error::AppError;
use keam_rank::prediction::{CandidateScores, RankPrediction, RankPredictor};

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Normalized KEAM entrance score
    #[arg(long, value_parser = parse_mark, allow_negative_numbers = true)]
    pub(crate) score: f64,
    /// Mathematics mark
    #[arg(long, value_parser = parse_mark, allow_negative_numbers = true)]
    pub(crate) maths: f64,
    /// Physics mark
    #[arg(long, value_parser = parse_mark, allow_negative_numbers = true)]
    pub(crate) physics: f64,
    /// Chemistry mark
    #[arg(long, value_parser = parse_mark, allow_negative_numbers = true)]
    pub(crate) chemistry: f64,
    /// Print the API response body instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl PredictArgs {
    fn scores(&self) -> CandidateScores {
        CandidateScores {
            normalized_score: self.score,
            maths: self.maths,
            physics: self.physics,
            chemistry: self.chemistry,
        }
    }
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let predictor = RankPredictor::from_config(&config.prediction);
    let scores = args.scores();
    let prediction = predictor.predict(&scores);

    if args.json {
        let body =
            serde_json::to_string_pretty(&prediction.view()).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        println!("{}", render_prediction(&predictor, &scores, &prediction));
    }

    Ok(())
}

fn render_prediction(
    predictor: &RankPredictor,
    scores: &CandidateScores,
    prediction: &RankPrediction,
) -> String {
    let view = prediction.view();
    let subject_total = scores.subject_total();
    let ceiling = predictor.composer().subject_ceiling();

    let mut lines = vec![
        "KEAM rank estimate".to_string(),
        format!("Entrance score: {}", scores.normalized_score),
    ];
    if subject_total > ceiling {
        lines.push(format!(
            "Subject total: {subject_total} (capped at {ceiling})"
        ));
    } else {
        lines.push(format!("Subject total: {subject_total}"));
    }
    lines.push(format!("Index score: {:.2}", view.final_index_score));
    lines.push(format!(
        "Estimated rank: {} to {} (point estimate {}, margin {})",
        view.estimated_rank_range.min_rank,
        view.estimated_rank_range.max_rank,
        prediction.point_rank,
        predictor.estimator().margin()
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_range_and_point_estimate() {
        let predictor = RankPredictor::default();
        let scores = CandidateScores {
            normalized_score: 200.0,
            maths: 40.0,
            physics: 35.0,
            chemistry: 30.0,
        };
        let prediction = predictor.predict(&scores);
        let output = render_prediction(&predictor, &scores, &prediction);

        assert!(output.contains("Index score: 305.00"));
        assert!(output.contains("Estimated rank: 36200 to 36300"));
        assert!(output.contains("point estimate 36250"));
        assert!(!output.contains("capped"));
    }

    #[test]
    fn summary_flags_capped_subject_total() {
        let predictor = RankPredictor::default();
        let scores = CandidateScores {
            normalized_score: 290.0,
            maths: 150.0,
            physics: 150.0,
            chemistry: 150.0,
        };
        let prediction = predictor.predict(&scores);
        let output = render_prediction(&predictor, &scores, &prediction);

        assert!(output.contains("Subject total: 450 (capped at 300)"));
        assert!(output.contains("Estimated rank: 1 to 51"));
    }
}
