mod cli;
mod infra;
mod routes;
mod server;
mod walk;

use decision_guide::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
