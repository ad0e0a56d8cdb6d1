//! Inbound links between rounds and validated answer recording.

use tracing::{debug, info};

use super::topology::{neighbors_in, RingTopology};
use crate::domain::models::{Answer, AnswerId, GameId, NewAnswer, Player, PlayerId};
use crate::domain::payload::AnswerPayload;
use crate::domain::rounds::Round;
use crate::domain::turn::PredecessorLink;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::store::GameStore;

/// A client's request to answer a round. `in_reply_to` echoes the answer the
/// client was shown; it is re-derived and checked before anything is written.
#[derive(Debug, Clone)]
pub struct RecordAnswer {
    pub game: GameId,
    pub player: PlayerId,
    pub round: Round,
    pub payload: AnswerPayload,
    pub in_reply_to: Option<AnswerId>,
}

/// Chain linking service.
pub struct ChainLinker;

impl ChainLinker {
    pub fn new() -> Self {
        Self
    }

    /// The predecessor answer `player` must reply to in `round`.
    pub async fn required_predecessor_answer(
        &self,
        store: &dyn GameStore,
        game: GameId,
        player: PlayerId,
        round: Round,
    ) -> Result<PredecessorLink, DomainError> {
        let players = RingTopology::new().members(store, game).await?;
        let neighbors = neighbors_in(&players, game, player)?;
        self.link_from(store, game, round, neighbors.predecessor).await
    }

    /// Resolve the link once the predecessor is known.
    pub(crate) async fn link_from(
        &self,
        store: &dyn GameStore,
        game: GameId,
        round: Round,
        predecessor: Player,
    ) -> Result<PredecessorLink, DomainError> {
        let Some(previous) = round.previous() else {
            return Ok(PredecessorLink::NotRequired);
        };

        match store.find_answer(game, predecessor.id, previous).await? {
            Some(answer) => Ok(PredecessorLink::Available {
                predecessor,
                answer,
            }),
            None => Ok(PredecessorLink::NotYetAvailable { predecessor }),
        }
    }

    /// Validate and insert an answer.
    ///
    /// Checks run in order: membership, payload, existing answer (Conflict),
    /// reply link (InvalidLink). A concurrent insert that wins the race between
    /// the check and the write still surfaces as Conflict from the store.
    pub async fn record_answer(
        &self,
        store: &dyn GameStore,
        request: RecordAnswer,
    ) -> Result<Answer, DomainError> {
        let RecordAnswer {
            game,
            player,
            round,
            payload,
            in_reply_to,
        } = request;

        let players = RingTopology::new().members(store, game).await?;
        let neighbors = neighbors_in(&players, game, player)?;

        payload.validate_for(round)?;

        if let Some(existing) = store.find_answer(game, player, round).await? {
            info!(
                game_id = game,
                player_id = player,
                round = round.get(),
                answer_id = existing.id,
                "Rejected answer: round already answered"
            );
            return Err(DomainError::conflict(
                ConflictKind::AlreadyAnswered,
                format!("Player {player} already answered round {round}"),
            ));
        }

        let link = self
            .link_from(store, game, round, neighbors.predecessor)
            .await?;
        check_link(&link, in_reply_to).inspect_err(|e| {
            info!(
                game_id = game,
                player_id = player,
                round = round.get(),
                claimed = ?in_reply_to,
                required = ?link.required_reply_target(),
                error = %e,
                "Rejected answer: stale or invalid reply link"
            );
        })?;

        let answer = store
            .insert_answer(NewAnswer {
                game_id: game,
                player_id: player,
                round,
                in_reply_to,
                payload,
            })
            .await
            .inspect_err(|e| {
                if e.is_conflict() {
                    info!(
                        game_id = game,
                        player_id = player,
                        round = round.get(),
                        error = %e,
                        "Rejected answer: lost insert race"
                    );
                }
            })?;

        debug!(
            game_id = game,
            player_id = player,
            round = round.get(),
            answer_id = answer.id,
            in_reply_to = ?answer.in_reply_to,
            "Answer recorded"
        );
        Ok(answer)
    }
}

impl Default for ChainLinker {
    fn default() -> Self {
        Self::new()
    }
}

/// The claimed reply target must be exactly the one the ring currently requires.
fn check_link(link: &PredecessorLink, claimed: Option<AnswerId>) -> Result<(), DomainError> {
    match (link, claimed) {
        (PredecessorLink::NotRequired, None) => Ok(()),
        (PredecessorLink::NotRequired, Some(id)) => Err(DomainError::invalid_link(format!(
            "Round 1 answers originate a thread and cannot reply to answer {id}"
        ))),
        (PredecessorLink::NotYetAvailable { predecessor }, _) => {
            Err(DomainError::invalid_link(format!(
                "{} has not answered the previous round yet",
                predecessor.name
            )))
        }
        (PredecessorLink::Available { answer, .. }, Some(id)) if id == answer.id => Ok(()),
        (PredecessorLink::Available { answer, .. }, claimed) => {
            Err(DomainError::invalid_link(format!(
                "Answer must reply to {}, not {}",
                answer.id,
                claimed.map_or_else(|| "nothing".to_string(), |id| id.to_string())
            )))
        }
    }
}
