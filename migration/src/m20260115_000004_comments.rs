use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000001_champions::Champions, m20260115_000002_users::Users};

static IDX_COMMENTS_USER_ID: &str = "idx-comments-user_id";
static IDX_COMMENTS_CHAMPION_ID: &str = "idx-comments-champion_id";
static FK_COMMENTS_USER_ID: &str = "fk-comments-user_id";
static FK_COMMENTS_CHAMPION_ID: &str = "fk-comments-champion_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(pk_auto(Comments::Id))
                    .col(text(Comments::Content))
                    .col(timestamp(Comments::CreatedAt))
                    .col(integer(Comments::UserId))
                    .col(integer(Comments::ChampionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENTS_USER_ID)
                    .table(Comments::Table)
                    .col(Comments::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENTS_CHAMPION_ID)
                    .table(Comments::Table)
                    .col(Comments::ChampionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMMENTS_USER_ID)
                    .from_tbl(Comments::Table)
                    .from_col(Comments::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMMENTS_CHAMPION_ID)
                    .from_tbl(Comments::Table)
                    .from_col(Comments::ChampionId)
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
                    .name(FK_COMMENTS_CHAMPION_ID)
                    .table(Comments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMMENTS_USER_ID)
                    .table(Comments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENTS_CHAMPION_ID)
                    .table(Comments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENTS_USER_ID)
                    .table(Comments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    Content,
    CreatedAt,
    UserId,
    ChampionId,
}
