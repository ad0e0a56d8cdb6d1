//! DTOs for players_sea adapter.

/// DTO for adding a player to a game's ring.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: i64,
    pub name: String,
    pub ring_position: i32,
}
