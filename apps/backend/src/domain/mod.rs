//! Domain layer: pure types and rules for rings, rounds, answers and threads.

pub mod models;
pub mod payload;
pub mod ring;
pub mod rounds;
pub mod thread;
pub mod turn;

#[cfg(test)]
mod tests_props_ring;

// Re-exports for ergonomics
pub use models::{Answer, AnswerId, Game, GameId, NewAnswer, Player, PlayerId};
pub use payload::{AnswerPayload, ImageRef};
pub use ring::{Neighbors, Ring};
pub use rounds::{AnswerKind, Round};
pub use thread::{ThreadEntry, ThreadGuard};
pub use turn::{PredecessorLink, TurnState};
