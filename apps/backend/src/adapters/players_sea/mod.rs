//! SeaORM adapter for players - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::PlayerCreate;

/// All players of a game in ring order.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::GameId.eq(game_id))
        .order_by_asc(players::Column::RingPosition)
        .all(conn)
        .await
}

/// Highest ring position taken in a game, `None` for an empty game.
pub async fn max_ring_position<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<i32>, sea_orm::DbErr> {
    players::Entity::find()
        .select_only()
        .column_as(Expr::col(players::Column::RingPosition).max(), "max_pos")
        .filter(players::Column::GameId.eq(game_id))
        .into_tuple::<Option<i32>>()
        .one(conn)
        .await
        .map(Option::flatten)
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let player_active = players::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        name: Set(dto.name),
        ring_position: Set(dto.ring_position),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    player_active.insert(conn).await
}
