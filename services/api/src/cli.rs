use crate::predict::{run_predict, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use keam_rank::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "KEAM Rank Predictor",
    about = "Estimate a KEAM engineering rank range from entrance and subject marks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Predict a rank range once and print it
    Predict(PredictArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["keam-rank-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn predict_accepts_negative_and_fractional_marks() {
        let cli = Cli::try_parse_from([
            "keam-rank-api",
            "predict",
            "--score",
            "-12.5",
            "--maths",
            "40",
            "--physics",
            "35.25",
            "--chemistry",
            "30",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Predict(args)) => {
                assert_eq!(args.score, -12.5);
                assert_eq!(args.physics, 35.25);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn predict_rejects_non_finite_marks() {
        let result = Cli::try_parse_from([
            "keam-rank-api",
            "predict",
            "--score",
            "inf",
            "--maths",
            "40",
            "--physics",
            "35",
            "--chemistry",
            "30",
        ]);
        assert!(result.is_err());
    }
}
