//! In-process `GameStore` with the same uniqueness rules as the database schema.

use async_trait::async_trait;
use parking_lot::Mutex;
use time::OffsetDateTime;

use super::GameStore;
use crate::domain::models::{Answer, AnswerId, Game, GameId, NewAnswer, Player, PlayerId};
use crate::domain::rounds::Round;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[derive(Debug, Default)]
struct Tables {
    games: Vec<Game>,
    players: Vec<Player>,
    answers: Vec<Answer>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// All writes take the single lock, so each insert checks and commits atomically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn find_game(&self, game: GameId) -> Result<Option<Game>, DomainError> {
        let tables = self.tables.lock();
        Ok(tables.games.iter().find(|g| g.id == game).cloned())
    }

    async fn list_players(&self, game: GameId) -> Result<Vec<Player>, DomainError> {
        let tables = self.tables.lock();
        let mut players: Vec<Player> = tables
            .players
            .iter()
            .filter(|p| p.game_id == game)
            .cloned()
            .collect();
        players.sort_by_key(|p| p.ring_position);
        Ok(players)
    }

    async fn find_answer(
        &self,
        game: GameId,
        player: PlayerId,
        round: Round,
    ) -> Result<Option<Answer>, DomainError> {
        let tables = self.tables.lock();
        Ok(tables
            .answers
            .iter()
            .find(|a| a.game_id == game && a.player_id == player && a.round == round)
            .cloned())
    }

    async fn find_answer_by_id(&self, id: AnswerId) -> Result<Option<Answer>, DomainError> {
        let tables = self.tables.lock();
        Ok(tables.answers.iter().find(|a| a.id == id).cloned())
    }

    async fn find_answer_by_reply_target(
        &self,
        answer: AnswerId,
    ) -> Result<Option<Answer>, DomainError> {
        let tables = self.tables.lock();
        Ok(tables
            .answers
            .iter()
            .filter(|a| a.in_reply_to == Some(answer))
            .min_by_key(|a| a.id)
            .cloned())
    }

    async fn insert_answer(&self, answer: NewAnswer) -> Result<Answer, DomainError> {
        let mut tables = self.tables.lock();

        if !tables
            .players
            .iter()
            .any(|p| p.id == answer.player_id && p.game_id == answer.game_id)
        {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!(
                    "Player {} not found in game {}",
                    answer.player_id, answer.game_id
                ),
            ));
        }
        if tables
            .answers
            .iter()
            .any(|a| a.player_id == answer.player_id && a.round == answer.round)
        {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyAnswered,
                format!(
                    "Player {} already answered round {}",
                    answer.player_id, answer.round
                ),
            ));
        }
        if let Some(target) = answer.in_reply_to {
            if !tables.answers.iter().any(|a| a.id == target) {
                return Err(DomainError::validation_other(format!(
                    "Reply target {target} does not exist"
                )));
            }
        }

        let stored = Answer {
            id: tables.next_id(),
            game_id: answer.game_id,
            player_id: answer.player_id,
            round: answer.round,
            in_reply_to: answer.in_reply_to,
            payload: answer.payload,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.answers.push(stored.clone());
        Ok(stored)
    }

    async fn insert_game(&self, name: &str) -> Result<Game, DomainError> {
        let mut tables = self.tables.lock();
        let game = Game {
            id: tables.next_id(),
            name: name.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        tables.games.push(game.clone());
        Ok(game)
    }

    async fn insert_player(&self, game: GameId, name: &str) -> Result<Player, DomainError> {
        let mut tables = self.tables.lock();
        if !tables.games.iter().any(|g| g.id == game) {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {game} not found"),
            ));
        }

        let ring_position = tables
            .players
            .iter()
            .filter(|p| p.game_id == game)
            .map(|p| p.ring_position)
            .max()
            .map_or(0, |max| max + 1);
        let player = Player {
            id: tables.next_id(),
            game_id: game,
            name: name.to_string(),
            ring_position,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.players.push(player.clone());
        Ok(player)
    }
}
