use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::DbConfig;
use crate::error::AppError;

/// Open a pool for `config` and apply per-connection session settings.
/// Does not run migrations.
pub async fn connect_db(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.effective_max_connections())
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let conn = Database::connect(options).await.map_err(|e| {
        warn!(engine = config.kind.engine(), url = %config.redacted_url(), error = %e, "Database connect failed");
        AppError::db_unavailable(format!("Failed to connect to database: {e}"))
    })?;

    for stmt in config.session_statements() {
        conn.execute_unprepared(&stmt).await?;
    }

    info!(
        engine = config.kind.engine(),
        url = %config.redacted_url(),
        max_connections = config.effective_max_connections(),
        "Database connected"
    );
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(config).await?;
    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("Failed to apply migrations: {e}")))?;
    Ok(conn)
}
