//! SeaORM adapter for answers - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::answers;

pub mod dto;

pub use dto::AnswerCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    answer_id: i64,
) -> Result<Option<answers::Model>, sea_orm::DbErr> {
    answers::Entity::find_by_id(answer_id).one(conn).await
}

pub async fn find_by_player_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
    round: i32,
) -> Result<Option<answers::Model>, sea_orm::DbErr> {
    answers::Entity::find()
        .filter(answers::Column::GameId.eq(game_id))
        .filter(answers::Column::PlayerId.eq(player_id))
        .filter(answers::Column::Round.eq(round))
        .one(conn)
        .await
}

/// The earliest answer replying to `answer_id`, if any.
pub async fn find_by_reply_target<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    answer_id: i64,
) -> Result<Option<answers::Model>, sea_orm::DbErr> {
    answers::Entity::find()
        .filter(answers::Column::InReplyTo.eq(answer_id))
        .order_by_asc(answers::Column::Id)
        .one(conn)
        .await
}

pub async fn create_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AnswerCreate,
) -> Result<answers::Model, sea_orm::DbErr> {
    let answer_active = answers::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        round: Set(dto.round),
        in_reply_to: Set(dto.in_reply_to),
        content: Set(dto.content),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    answer_active.insert(conn).await
}
