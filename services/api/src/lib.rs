mod cli;
mod demo;
mod infra;
mod notebook;
mod routes;
mod server;

use promotion_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
