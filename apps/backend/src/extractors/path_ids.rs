//! Typed path parameters. Malformed ids become problem-details 400s.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::models::{GameId, PlayerId};
use crate::domain::rounds::Round;
use crate::error::AppError;
use crate::errors::ErrorCode;

fn positive_id(req: &HttpRequest, name: &str) -> Result<i64, AppError> {
    let raw = req.match_info().get(name).ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidId, format!("Missing {name} parameter"))
    })?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Invalid {name}: {raw}"),
        )),
    }
}

fn player_path(req: &HttpRequest) -> Result<PlayerPath, AppError> {
    Ok(PlayerPath {
        game: positive_id(req, "game_id")?,
        player: positive_id(req, "player_id")?,
    })
}

fn turn_path(req: &HttpRequest) -> Result<TurnPath, AppError> {
    let PlayerPath { game, player } = player_path(req)?;
    let raw = req.match_info().get("round").unwrap_or_default();
    let round = raw
        .parse::<u32>()
        .ok()
        .and_then(|n| Round::new(n).ok())
        .ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidRound, format!("Invalid round: {raw}"))
        })?;
    Ok(TurnPath {
        game,
        player,
        round,
    })
}

/// `{game_id}` from the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePath(pub GameId);

impl FromRequest for GamePath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(positive_id(req, "game_id").map(GamePath))
    }
}

/// `{game_id}` and `{player_id}` from the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerPath {
    pub game: GameId,
    pub player: PlayerId,
}

impl FromRequest for PlayerPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(player_path(req))
    }
}

/// `{game_id}/players/{player_id}/rounds/{round}` from the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPath {
    pub game: GameId,
    pub player: PlayerId,
    pub round: Round,
}

impl FromRequest for TurnPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(turn_path(req))
    }
}
