use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000001_champions::Champions, m20260115_000002_users::Users};

static IDX_FAVORITES_USER_ID_CHAMPION_ID: &str = "idx-favorites-user_id-champion_id";
static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";
static FK_FAVORITES_CHAMPION_ID: &str = "fk-favorites-champion_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer(Favorites::ChampionId))
                    .col(timestamp(Favorites::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One favorite per (user, champion); the toggle relies on this.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_ID_CHAMPION_ID)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::ChampionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITES_USER_ID)
                    .from_tbl(Favorites::Table)
                    .from_col(Favorites::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITES_CHAMPION_ID)
                    .from_tbl(Favorites::Table)
                    .from_col(Favorites::ChampionId)
                    .to_tbl(Champions::Table)
                    .to_col(Champions::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITES_CHAMPION_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_ID_CHAMPION_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    ChampionId,
    CreatedAt,
}
