use crate::config::db::DbConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db: Option<DbConfig>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, config: DbConfig) -> Self {
        self.db = Some(config);
        self
    }

    /// Connect and migrate when a database is configured.
    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            Some(config) => {
                let conn = bootstrap_db(&config).await?;
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::without_db()),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
