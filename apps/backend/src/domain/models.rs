//! Domain records for games, players and answers.
//!
//! These are plain values; relations are identifier references resolved
//! through a `GameStore`, never an object graph.

use serde::Serialize;
use time::OffsetDateTime;

use super::payload::AnswerPayload;
use super::rounds::Round;

pub type GameId = i64;
pub type PlayerId = i64;
pub type AnswerId = i64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A member of a game's ring. `ring_position` is the stored ordering key
/// assigned at join time; ring order is ascending `ring_position`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub game_id: GameId,
    pub name: String,
    pub ring_position: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub id: AnswerId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub round: Round,
    pub in_reply_to: Option<AnswerId>,
    pub payload: AnswerPayload,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Insert request handed to the store once linking has been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnswer {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub round: Round,
    pub in_reply_to: Option<AnswerId>,
    pub payload: AnswerPayload,
}
