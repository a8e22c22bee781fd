use sea_orm::entity::prelude::*;

/// Join row marking a champion as favorited by a user. The favorites table
/// carries a unique index over (user_id, champion_id) so a pair can exist at
/// most once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub champion_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::champion::Entity",
        from = "Column::ChampionId",
        to = "super::champion::Column::Id"
    )]
    Champion,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::champion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Champion.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
