use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use octofit_tracker_migration::Migrator;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Connect to a fresh in-memory SQLite database with every tracker migration applied.
///
/// The pool is pinned to a single connection: each SQLite `:memory:`
/// connection is its own database.
///
/// # Panics
///
/// Panics if the connection or a migration fails.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new(IN_MEMORY_URL);
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("failed to open in-memory sqlite");
    Migrator::up(&db, None)
        .await
        .expect("failed to run tracker migrations");
    db
}
