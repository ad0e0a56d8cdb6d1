use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Expr, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    GameId,
    Name,
    RingPosition,
    CreatedAt,
}

#[derive(Iden)]
enum Answers {
    Table,
    Id,
    GameId,
    PlayerId,
    Round,
    InReplyTo,
    Content,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // players: ring order is the stored ring_position, never the row id
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::RingPosition).integer().not_null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_game_id")
                            .from(Players::Table, Players::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_players_game_ring_position")
                    .table(Players::Table)
                    .col(Players::GameId)
                    .col(Players::RingPosition)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // answers
        manager
            .create_table(
                Table::create()
                    .table(Answers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Answers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Answers::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Answers::PlayerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Answers::Round)
                            .integer()
                            .not_null()
                            .check(Expr::col(Answers::Round).gte(1)),
                    )
                    .col(ColumnDef::new(Answers::InReplyTo).big_integer().null())
                    .col(ColumnDef::new(Answers::Content).text().not_null())
                    .col(
                        ColumnDef::new(Answers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answers_game_id")
                            .from(Answers::Table, Answers::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answers_player_id")
                            .from(Answers::Table, Answers::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answers_in_reply_to")
                            .from(Answers::Table, Answers::InReplyTo)
                            .to(Answers::Table, Answers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // one answer per (player, round)
        manager
            .create_index(
                Index::create()
                    .name("ux_answers_player_round")
                    .table(Answers::Table)
                    .col(Answers::PlayerId)
                    .col(Answers::Round)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // reverse-link lookups for thread walks
        manager
            .create_index(
                Index::create()
                    .name("ix_answers_in_reply_to")
                    .table(Answers::Table)
                    .col(Answers::InReplyTo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_answers_game_id")
                    .table(Answers::Table)
                    .col(Answers::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_answers_game_id")
                    .table(Answers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_answers_in_reply_to")
                    .table(Answers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_answers_player_round")
                    .table(Answers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Answers::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_players_game_ring_position")
                    .table(Players::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        Ok(())
    }
}
