#![allow(dead_code)]


use tempfile::TempDir;
use telepic_backend::config::db::DbConfig;
use telepic_backend::error::AppError;
use telepic_backend::infra::state::build_state;
use telepic_backend::state::app_state::AppState;

/// A migrated SQLite database in its own temp directory. The directory
/// (and the database) is removed when this is dropped.
pub struct TestDb {
    pub state: AppState,
    _dir: TempDir,
}

impl TestDb {
    pub fn db(&self) -> &sea_orm::DatabaseConnection {
        self.state.db().expect("test state always has a database")
    }
}

pub async fn build_test_state() -> Result<TestDb, AppError> {
    let dir = tempfile::tempdir()
        .map_err(|e| AppError::config(format!("failed to create temp dir: {e}")))?;
    let path = dir.path().join("telepic-test.db");
    let config = DbConfig::new(format!("sqlite://{}?mode=rwc", path.display()))?;
    let state = build_state().with_db(config).build().await?;
    Ok(TestDb { state, _dir: dir })
}
