//! Persistence seam for the game core.
//!
//! Services take `&dyn GameStore` so the same logic runs against SeaORM
//! (inside a request transaction) or the in-process `MemoryStore`.

use async_trait::async_trait;

use crate::domain::models::{Answer, AnswerId, Game, GameId, NewAnswer, Player, PlayerId};
use crate::domain::rounds::Round;
use crate::errors::domain::DomainError;

pub mod memory;
pub mod sea;

pub use memory::MemoryStore;
pub use sea::SeaStore;

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn find_game(&self, game: GameId) -> Result<Option<Game>, DomainError>;

    /// Players in ring order (ascending `ring_position`).
    async fn list_players(&self, game: GameId) -> Result<Vec<Player>, DomainError>;

    async fn find_answer(
        &self,
        game: GameId,
        player: PlayerId,
        round: Round,
    ) -> Result<Option<Answer>, DomainError>;

    async fn find_answer_by_id(&self, id: AnswerId) -> Result<Option<Answer>, DomainError>;

    /// The answer whose `in_reply_to` is `answer`, if any.
    async fn find_answer_by_reply_target(
        &self,
        answer: AnswerId,
    ) -> Result<Option<Answer>, DomainError>;

    /// Atomically insert; a second answer for the same (player, round) or a
    /// second reply to the same answer fails with Conflict.
    async fn insert_answer(&self, answer: NewAnswer) -> Result<Answer, DomainError>;

    async fn insert_game(&self, name: &str) -> Result<Game, DomainError>;

    /// Append a player at the next ring position.
    async fn insert_player(&self, game: GameId, name: &str) -> Result<Player, DomainError>;
}
