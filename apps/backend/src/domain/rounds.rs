//! Round numbers and the parity rule that decides what kind of answer a round takes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// What a round asks for. Derived from the round number alone; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Text,
    Image,
}

/// A 1-based round number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Round(u32);

impl Round {
    pub const FIRST: Round = Round(1);

    pub fn new(n: u32) -> Result<Self, DomainError> {
        if n == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidRound,
                "Round numbers start at 1",
            ));
        }
        Ok(Round(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// The round this one replies to; `None` for round 1.
    pub fn previous(self) -> Option<Round> {
        if self.is_first() {
            None
        } else {
            Some(Round(self.0 - 1))
        }
    }

    pub fn next(self) -> Round {
        Round(self.0.saturating_add(1))
    }

    /// Odd rounds are text, even rounds are images.
    pub fn expected_kind(self) -> AnswerKind {
        if self.0 % 2 == 1 {
            AnswerKind::Text
        } else {
            AnswerKind::Image
        }
    }
}

impl TryFrom<u32> for Round {
    type Error = DomainError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Round::new(n)
    }
}

impl TryFrom<i32> for Round {
    type Error = DomainError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        let n = u32::try_from(n).map_err(|_| {
            DomainError::validation(ValidationKind::InvalidRound, format!("Invalid round {n}"))
        })?;
        Round::new(n)
    }
}

impl From<Round> for u32 {
    fn from(round: Round) -> Self {
        round.0
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
