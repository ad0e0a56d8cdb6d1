use std::env;

use crate::error::AppError;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

/// Database backend, decided from the connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    SqliteFile,
    SqliteMemory,
    Postgres,
}

impl DbKind {
    pub fn from_url(url: &str) -> Result<Self, AppError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(DbKind::Postgres)
        } else if url.starts_with("sqlite:") {
            if url.contains(":memory:") || url.contains("mode=memory") {
                Ok(DbKind::SqliteMemory)
            } else {
                Ok(DbKind::SqliteFile)
            }
        } else {
            Err(AppError::config(format!(
                "Unsupported DATABASE_URL scheme: '{}'",
                redact(url)
            )))
        }
    }

    pub fn engine(self) -> &'static str {
        match self {
            DbKind::Postgres => "postgresql",
            DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
        }
    }
}

/// Connection settings for the game database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
    pub kind: DbKind,
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Result<Self, AppError> {
        let url = url.into();
        let kind = DbKind::from_url(&url)?;
        Ok(Self {
            url,
            kind,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        })
    }

    /// Read `DATABASE_URL` (required) and `DB_MAX_CONNECTIONS` (optional).
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self::new(must_var("DATABASE_URL")?)?;
        match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => {
                let max = raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                    AppError::config(format!(
                        "DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                    ))
                })?;
                Ok(config.with_max_connections(max))
            }
            Err(_) => Ok(config),
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Pool size actually used. SQLite has a single writer, so file databases
    /// get one connection; an in-memory database exists per connection.
    pub fn effective_max_connections(&self) -> u32 {
        match self.kind {
            DbKind::Postgres => self.max_connections,
            DbKind::SqliteFile | DbKind::SqliteMemory => 1,
        }
    }

    /// Per-connection statements run right after connecting.
    pub fn session_statements(&self) -> Vec<String> {
        match self.kind {
            DbKind::SqliteFile | DbKind::SqliteMemory => vec![
                "PRAGMA foreign_keys = ON;".to_string(),
                format!("PRAGMA busy_timeout = {};", self.busy_timeout_ms),
            ],
            DbKind::Postgres => vec!["SET timezone = 'UTC';".to_string()],
        }
    }

    /// URL safe to log.
    pub fn redacted_url(&self) -> String {
        redact(&self.url)
    }
}

/// HTTP bind address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `BACKEND_HOST` (default `0.0.0.0`) and `BACKEND_PORT` (default 3001).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => 3001,
        };
        Ok(Self { host, port })
    }
}

/// Strip credentials from a connection URL.
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
