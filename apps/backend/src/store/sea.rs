//! `GameStore` over any SeaORM connection or transaction.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use super::GameStore;
use crate::domain::models::{Answer, AnswerId, Game, GameId, NewAnswer, Player, PlayerId};
use crate::domain::rounds::Round;
use crate::errors::domain::DomainError;
use crate::repos::{answers, games, players};

pub struct SeaStore<'c, C> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait + Send + Sync> SeaStore<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait + Send + Sync> GameStore for SeaStore<'c, C> {
    async fn find_game(&self, game: GameId) -> Result<Option<Game>, DomainError> {
        games::find_by_id(self.conn, game).await
    }

    async fn list_players(&self, game: GameId) -> Result<Vec<Player>, DomainError> {
        players::list_by_game(self.conn, game).await
    }

    async fn find_answer(
        &self,
        game: GameId,
        player: PlayerId,
        round: Round,
    ) -> Result<Option<Answer>, DomainError> {
        answers::find_by_player_round(self.conn, game, player, round).await
    }

    async fn find_answer_by_id(&self, id: AnswerId) -> Result<Option<Answer>, DomainError> {
        answers::find_by_id(self.conn, id).await
    }

    async fn find_answer_by_reply_target(
        &self,
        answer: AnswerId,
    ) -> Result<Option<Answer>, DomainError> {
        answers::find_by_reply_target(self.conn, answer).await
    }

    async fn insert_answer(&self, answer: NewAnswer) -> Result<Answer, DomainError> {
        answers::create_answer(self.conn, answer).await
    }

    async fn insert_game(&self, name: &str) -> Result<Game, DomainError> {
        games::create_game(self.conn, name).await
    }

    async fn insert_player(&self, game: GameId, name: &str) -> Result<Player, DomainError> {
        players::append_to_ring(self.conn, game, name).await
    }
}
