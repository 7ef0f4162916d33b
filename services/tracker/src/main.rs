use anyhow::Context;
use clap::{Parser, Subcommand};
use sea_orm::Database;
use tracing::info;

use octofit_core::config::Config;
use octofit_core::tracing::init_tracing;

use octofit_tracker::config::TrackerConfig;
use octofit_tracker::router::build_router;
use octofit_tracker::state::AppState;
use octofit_tracker::usecase::populate::PopulateDbUseCase;

#[derive(Parser)]
#[command(name = "tracker", about = "OctoFit fitness tracker service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default).
    Serve,
    /// Wipe the database and fill it with the superhero demo dataset.
    PopulateDb,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = TrackerConfig::try_from_env().context("failed to load tracker config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    let state = AppState { db };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state, &config).await,
        Command::PopulateDb => populate(state).await,
    }
}

async fn serve(state: AppState, config: &TrackerConfig) -> anyhow::Result<()> {
    let router = build_router(state);
    let http_addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("tracker service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")
}

async fn populate(state: AppState) -> anyhow::Result<()> {
    let uc = PopulateDbUseCase {
        teams: state.team_repo(),
        users: state.user_repo(),
        activities: state.activity_repo(),
        leaderboard: state.leaderboard_repo(),
        workouts: state.workout_repo(),
    };
    let summary = uc.execute().await.context("failed to populate database")?;
    info!(
        teams = summary.teams,
        users = summary.users,
        workouts = summary.workouts,
        activities = summary.activities,
        leaderboard_entries = summary.leaderboard_entries,
        "database population completed successfully"
    );
    Ok(())
}
