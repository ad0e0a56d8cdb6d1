//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert here, and higher layers
//! map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Map SQLite "UNIQUE constraint failed: t.a, t.b" messages to domain conflicts.
/// SQLite lists every column of the violated index, so match on all of them.
fn map_sqlite_unique_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    let prefix = "UNIQUE constraint failed: ";
    let start = error_msg.find(prefix)? + prefix.len();
    let columns: Vec<&str> = error_msg[start..]
        .lines()
        .next()
        .unwrap_or_default()
        .split(',')
        .map(|c| c.trim().trim_matches('"'))
        .collect();
    let has = |col: &str| columns.contains(&col);

    if has("answers.player_id") && has("answers.round") {
        return Some((ConflictKind::AlreadyAnswered, "Answer already recorded for this round"));
    }
    if has("players.game_id") && has("players.ring_position") {
        return Some((ConflictKind::RingPositionTaken, "Ring position already taken"));
    }
    None
}

/// Map PostgreSQL constraint names to domain conflicts.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_answers_player_round") {
        return Some((ConflictKind::AlreadyAnswered, "Answer already recorded for this round"));
    }
    if error_msg.contains("ux_players_game_ring_position") {
        return Some((ConflictKind::RingPositionTaken, "Ring position already taken"));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        if let Some((kind, detail)) = map_sqlite_unique_to_conflict(&error_msg)
            .or_else(|| map_postgres_constraint_to_conflict(&error_msg))
        {
            // Expected under races; the caller surfaces it as a conflict.
            tracing::debug!(?kind, "Unique constraint violation");
            return DomainError::conflict(kind, detail);
        }

        warn!(raw_error = %error_msg, "Unmapped unique constraint violation");
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("database is locked") {
        warn!(raw_error = %error_msg, "Database timeout or lock contention");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
