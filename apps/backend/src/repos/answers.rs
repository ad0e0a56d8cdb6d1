//! Answer repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::answers_sea as answers_adapter;
use crate::domain::models::{Answer, AnswerId, GameId, NewAnswer, PlayerId};
use crate::domain::payload::AnswerPayload;
use crate::domain::rounds::Round;
use crate::entities::answers;
use crate::errors::domain::{DomainError, ValidationKind};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    answer_id: AnswerId,
) -> Result<Option<Answer>, DomainError> {
    answers_adapter::find_by_id(conn, answer_id)
        .await?
        .map(Answer::try_from)
        .transpose()
}

pub async fn find_by_player_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
    player_id: PlayerId,
    round: Round,
) -> Result<Option<Answer>, DomainError> {
    answers_adapter::find_by_player_round(conn, game_id, player_id, round_column(round)?)
        .await?
        .map(Answer::try_from)
        .transpose()
}

pub async fn find_by_reply_target<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    answer_id: AnswerId,
) -> Result<Option<Answer>, DomainError> {
    answers_adapter::find_by_reply_target(conn, answer_id)
        .await?
        .map(Answer::try_from)
        .transpose()
}

/// Insert an answer. Uniqueness on `(player_id, round)` and `in_reply_to`
/// is enforced by the database and surfaces as a Conflict.
pub async fn create_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewAnswer,
) -> Result<Answer, DomainError> {
    let row = answers_adapter::create_answer(
        conn,
        answers_adapter::AnswerCreate {
            game_id: new.game_id,
            player_id: new.player_id,
            round: round_column(new.round)?,
            in_reply_to: new.in_reply_to,
            content: new.payload.content().to_string(),
        },
    )
    .await?;
    Answer::try_from(row)
}

fn round_column(round: Round) -> Result<i32, DomainError> {
    i32::try_from(round.get()).map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidRound,
            format!("Round {round} is out of range"),
        )
    })
}

impl TryFrom<answers::Model> for Answer {
    type Error = DomainError;

    fn try_from(model: answers::Model) -> Result<Self, Self::Error> {
        let round = Round::try_from(model.round).map_err(|_| {
            DomainError::integrity(format!(
                "Answer {} has invalid stored round {}",
                model.id, model.round
            ))
        })?;
        Ok(Self {
            id: model.id,
            game_id: model.game_id,
            player_id: model.player_id,
            round,
            in_reply_to: model.in_reply_to,
            payload: AnswerPayload::from_stored(round, model.content),
            created_at: model.created_at,
        })
    }
}
