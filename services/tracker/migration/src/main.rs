use sea_orm_migration::prelude::*;

use octofit_tracker_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
