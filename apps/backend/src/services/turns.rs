//! Turn state resolution for a player and round.

use tracing::{debug, error};

use super::chain_linker::ChainLinker;
use super::topology::{neighbors_in, RingTopology};
use crate::domain::models::{GameId, PlayerId};
use crate::domain::rounds::Round;
use crate::domain::turn::{classify, TurnFacts, TurnState};
use crate::errors::domain::DomainError;
use crate::store::GameStore;

/// Turn state service.
pub struct TurnStateResolver;

impl TurnStateResolver {
    pub fn new() -> Self {
        Self
    }

    /// Classify what `player` should see for `round`. Read-only; repeated
    /// calls without intervening writes return the same state.
    pub async fn resolve(
        &self,
        store: &dyn GameStore,
        game: GameId,
        player: PlayerId,
        round: Round,
    ) -> Result<TurnState, DomainError> {
        let players = RingTopology::new().members(store, game).await?;
        let neighbors = neighbors_in(&players, game, player)?;

        let facts = match store.find_answer(game, player, round).await? {
            Some(answer) => {
                let replied_to = match answer.in_reply_to {
                    Some(target) => {
                        let Some(target_answer) = store.find_answer_by_id(target).await? else {
                            error!(
                                game_id = game,
                                answer_id = answer.id,
                                in_reply_to = target,
                                "Answer replies to a missing answer"
                            );
                            return Err(DomainError::integrity(format!(
                                "Answer {} replies to missing answer {target}",
                                answer.id
                            )));
                        };
                        Some(target_answer)
                    }
                    None => None,
                };
                TurnFacts::Answered { answer, replied_to }
            }
            None => TurnFacts::Open {
                round,
                link: ChainLinker::new()
                    .link_from(store, game, round, neighbors.predecessor)
                    .await?,
                successor: neighbors.successor,
            },
        };

        let state = classify(facts);
        debug!(
            game_id = game,
            player_id = player,
            round = round.get(),
            state = state_name(&state),
            "Turn state resolved"
        );
        Ok(state)
    }
}

impl Default for TurnStateResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn state_name(state: &TurnState) -> &'static str {
    match state {
        TurnState::AlreadyAnswered { .. } => "already_answered",
        TurnState::WaitingOnPredecessor { .. } => "waiting_on_predecessor",
        TurnState::ReadyToOriginate { .. } => "ready_to_originate",
        TurnState::ReadyToRespond { .. } => "ready_to_respond",
    }
}
