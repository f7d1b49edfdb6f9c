mod cli;
mod demo;
mod infra;
mod report;
mod routes;
mod server;

use travel_planner::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
