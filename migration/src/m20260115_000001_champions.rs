use sea_orm_migration::{prelude::*, schema::*};

static IDX_CHAMPIONS_NAME: &str = "idx-champions-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Champions::Table)
                    .if_not_exists()
                    .col(pk_auto(Champions::Id))
                    .col(string_uniq(Champions::Name))
                    .col(string(Champions::Role))
                    .col(json(Champions::Tags))
                    .col(string(Champions::ImageUrl))
                    .col(text(Champions::Description))
                    .col(string(Champions::Title))
                    .col(integer(Champions::Difficulty))
                    .col(json(Champions::Abilities))
                    .col(json(Champions::Passive))
                    .col(json(Champions::AllyTips))
                    .col(json(Champions::EnemyTips))
                    .col(json(Champions::Skins))
                    .col(timestamp(Champions::CreatedAt))
                    .col(timestamp(Champions::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAMPIONS_NAME)
                    .table(Champions::Table)
                    .col(Champions::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAMPIONS_NAME)
                    .table(Champions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Champions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Champions {
    Table,
    Id,
    Name,
    Role,
    Tags,
    ImageUrl,
    Description,
    Title,
    Difficulty,
    Abilities,
    Passive,
    AllyTips,
    EnemyTips,
    Skins,
    CreatedAt,
    UpdatedAt,
}
