//! Turn classification: what a player should see and do for a given round.

use serde::Serialize;

use super::models::{Answer, AnswerId, Player};
use super::rounds::{AnswerKind, Round};

/// The predecessor answer a round must reply to.
#[derive(Debug, Clone, PartialEq)]
pub enum PredecessorLink {
    /// Round 1: the player originates a thread.
    NotRequired,
    /// The predecessor hasn't answered the previous round yet.
    NotYetAvailable { predecessor: Player },
    /// The predecessor's previous-round answer; a new answer must cite its id.
    Available { predecessor: Player, answer: Answer },
}

impl PredecessorLink {
    /// The id a new answer must carry as `in_reply_to`, if any.
    pub fn required_reply_target(&self) -> Option<AnswerId> {
        match self {
            PredecessorLink::Available { answer, .. } => Some(answer.id),
            _ => None,
        }
    }

    pub fn answer(&self) -> Option<&Answer> {
        match self {
            PredecessorLink::Available { answer, .. } => Some(answer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TurnState {
    AlreadyAnswered {
        answer: Answer,
        /// What the answer replied to, for display. `None` in round 1.
        predecessor_answer: Option<Answer>,
    },
    WaitingOnPredecessor {
        predecessor_name: String,
    },
    ReadyToOriginate {
        successor_name: String,
    },
    ReadyToRespond {
        predecessor_name: String,
        predecessor_answer: Answer,
        expected_kind: AnswerKind,
    },
}

/// Persisted facts a turn decision is made from.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnFacts {
    Answered {
        answer: Answer,
        replied_to: Option<Answer>,
    },
    Open {
        round: Round,
        link: PredecessorLink,
        successor: Player,
    },
}

/// Pure four-way decision; holds no state between calls.
pub fn classify(facts: TurnFacts) -> TurnState {
    match facts {
        TurnFacts::Answered { answer, replied_to } => TurnState::AlreadyAnswered {
            answer,
            predecessor_answer: replied_to,
        },
        TurnFacts::Open {
            link: PredecessorLink::NotRequired,
            successor,
            ..
        } => TurnState::ReadyToOriginate {
            successor_name: successor.name,
        },
        TurnFacts::Open {
            link: PredecessorLink::NotYetAvailable { predecessor },
            ..
        } => TurnState::WaitingOnPredecessor {
            predecessor_name: predecessor.name,
        },
        TurnFacts::Open {
            round,
            link: PredecessorLink::Available {
                predecessor,
                answer,
            },
            ..
        } => TurnState::ReadyToRespond {
            predecessor_name: predecessor.name,
            predecessor_answer: answer,
            expected_kind: round.expected_kind(),
        },
    }
}
