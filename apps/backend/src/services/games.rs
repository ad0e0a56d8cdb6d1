//! Game creation, joining and listing.

use serde::Serialize;
use tracing::info;

use super::topology::RingTopology;
use crate::domain::models::{Game, GameId, Player};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::store::GameStore;

pub const MAX_NAME_LEN: usize = 64;

/// A game with its ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameOverview {
    #[serde(flatten)]
    pub game: Game,
    pub players: Vec<Player>,
}

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_game(&self, store: &dyn GameStore, name: &str) -> Result<Game, DomainError> {
        let name = clean_name(name, "Game")?;
        let game = store.insert_game(name).await?;
        info!(game_id = game.id, "Game created");
        Ok(game)
    }

    /// Add a player at the end of the ring. Joining is allowed at any round;
    /// the ring change applies to every later neighbour lookup.
    pub async fn join_game(
        &self,
        store: &dyn GameStore,
        game: GameId,
        name: &str,
    ) -> Result<Player, DomainError> {
        let name = clean_name(name, "Player")?;
        self.require_game(store, game).await?;
        let player = store.insert_player(game, name).await?;
        info!(
            game_id = game,
            player_id = player.id,
            ring_position = player.ring_position,
            "Player joined"
        );
        Ok(player)
    }

    pub async fn list_players(
        &self,
        store: &dyn GameStore,
        game: GameId,
    ) -> Result<Vec<Player>, DomainError> {
        RingTopology::new().members(store, game).await
    }

    pub async fn overview(
        &self,
        store: &dyn GameStore,
        game: GameId,
    ) -> Result<GameOverview, DomainError> {
        let found = self.require_game(store, game).await?;
        let players = store.list_players(game).await?;
        Ok(GameOverview {
            game: found,
            players,
        })
    }

    async fn require_game(&self, store: &dyn GameStore, game: GameId) -> Result<Game, DomainError> {
        store.find_game(game).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game} not found"))
        })
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

fn clean_name<'a>(name: &'a str, what: &str) -> Result<&'a str, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("{what} name must not be blank"),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("{what} name exceeds {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(name)
}
