//! Ring neighbours over persisted players.

use crate::domain::models::{GameId, Player, PlayerId};
use crate::domain::ring::{Neighbors, Ring};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::store::GameStore;

/// Ring topology service.
pub struct RingTopology;

impl RingTopology {
    pub fn new() -> Self {
        Self
    }

    /// Predecessor and successor of `player`, `NotFound` if the game or the
    /// membership does not exist.
    pub async fn neighbors(
        &self,
        store: &dyn GameStore,
        game: GameId,
        player: PlayerId,
    ) -> Result<Neighbors<Player>, DomainError> {
        let players = self.members(store, game).await?;
        neighbors_in(&players, game, player)
    }

    /// The game's players in ring order. An unknown game is `NotFound`; an
    /// existing game may have no players yet.
    pub async fn members(
        &self,
        store: &dyn GameStore,
        game: GameId,
    ) -> Result<Vec<Player>, DomainError> {
        let players = store.list_players(game).await?;
        if players.is_empty() && store.find_game(game).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {game} not found"),
            ));
        }
        Ok(players)
    }
}

impl Default for RingTopology {
    fn default() -> Self {
        Self::new()
    }
}

/// Neighbours of `player` within an already loaded ring.
pub(crate) fn neighbors_in(
    players: &[Player],
    game: GameId,
    player: PlayerId,
) -> Result<Neighbors<Player>, DomainError> {
    Ring::new(players)
        .neighbors_of(|p| p.id == player)
        .map(|n| n.map(Player::clone))
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player} is not a member of game {game}"),
            )
        })
}
