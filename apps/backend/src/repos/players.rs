//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::domain::models::{GameId, Player};
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Players of a game in ring order (ascending `ring_position`).
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
) -> Result<Vec<Player>, DomainError> {
    let rows = players_adapter::list_by_game(conn, game_id).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

/// Append a player at the end of the ring.
///
/// Two joins racing for the same position hit the unique
/// `(game_id, ring_position)` index; the loser sees `RingPositionTaken`.
pub async fn append_to_ring<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
    name: &str,
) -> Result<Player, DomainError> {
    let next = players_adapter::max_ring_position(conn, game_id)
        .await?
        .map_or(0, |max| max + 1);

    let row = players_adapter::create_player(
        conn,
        players_adapter::PlayerCreate {
            game_id,
            name: name.to_string(),
            ring_position: next,
        },
    )
    .await?;
    Ok(Player::from(row))
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            name: model.name,
            ring_position: model.ring_position,
            created_at: model.created_at,
        }
    }
}
