mod cli;
mod infra;
mod predict;
mod routes;
mod server;

use keam_rank::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
