//! Thread integrity rules and the labeled view of a reconstructed thread.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::models::{Answer, AnswerId, GameId, Player, PlayerId};
use super::payload::AnswerPayload;
use super::rounds::Round;
use crate::errors::domain::DomainError;

/// Checks each answer of a forward walk against the one before it.
///
/// A thread starts at a round-1 answer with no reply target and every next
/// answer replies to the previous one in the following round. Any break in
/// that chain, or a revisited answer, is corrupted state.
#[derive(Debug, Default)]
pub struct ThreadGuard {
    visited: HashSet<AnswerId>,
    last: Option<(AnswerId, GameId, Round)>,
}

impl ThreadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, answer: &Answer) -> Result<(), DomainError> {
        if !self.visited.insert(answer.id) {
            return Err(DomainError::integrity(format!(
                "Answer {} visited twice while walking a thread",
                answer.id
            )));
        }

        match self.last {
            None => {
                if !answer.round.is_first() || answer.in_reply_to.is_some() {
                    return Err(DomainError::integrity(format!(
                        "Thread origin {} must be an unlinked round-1 answer",
                        answer.id
                    )));
                }
            }
            Some((prev_id, prev_game, prev_round)) => {
                if answer.game_id != prev_game {
                    return Err(DomainError::integrity(format!(
                        "Answer {} replies across games ({} -> {})",
                        answer.id, prev_game, answer.game_id
                    )));
                }
                if answer.in_reply_to != Some(prev_id) {
                    return Err(DomainError::integrity(format!(
                        "Answer {} does not reply to {prev_id}",
                        answer.id
                    )));
                }
                if answer.round.get() != prev_round.get() + 1 {
                    return Err(DomainError::integrity(format!(
                        "Answer {} is in round {} but replies to round {prev_round}",
                        answer.id, answer.round
                    )));
                }
            }
        }

        self.last = Some((answer.id, answer.game_id, answer.round));
        Ok(())
    }
}

/// One step of a thread as shown to players.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadEntry {
    pub player_name: String,
    pub round: Round,
    pub payload: AnswerPayload,
}

/// Map player ids to display names.
pub fn name_lookup(players: &[Player]) -> HashMap<PlayerId, String> {
    players.iter().map(|p| (p.id, p.name.clone())).collect()
}

/// Label each answer with its author's name. A missing author is corrupted state.
pub fn label_thread(
    answers: Vec<Answer>,
    names: &HashMap<PlayerId, String>,
) -> Result<Vec<ThreadEntry>, DomainError> {
    answers
        .into_iter()
        .map(|answer| {
            let name = names.get(&answer.player_id).ok_or_else(|| {
                DomainError::integrity(format!(
                    "Answer {} has unknown author {}",
                    answer.id, answer.player_id
                ))
            })?;
            Ok(ThreadEntry {
                player_name: name.clone(),
                round: answer.round,
                payload: answer.payload,
            })
        })
        .collect()
}
