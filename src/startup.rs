use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::AppError};

/// Connects to the roster database and brings its schema up to date.
///
/// Works against both SQLite and Postgres URLs. Pending migrations are applied before
/// the connection is handed out, so rostering never runs against a partial schema.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    let pending = Migrator::get_pending_migrations(&db).await?;
    if !pending.is_empty() {
        tracing::info!(pending = pending.len(), "Applying schema migrations");
    }
    Migrator::up(&db, None).await?;

    Ok(db)
}
