use sea_orm::entity::prelude::*;

/// A champion mirrored from the DDragon CDN. `name` is the DDragon champion
/// key (the `data` map key, e.g. `MonkeyKing`) and is the upsert key for
/// ingestion. The `Json` columns hold DDragon sub-documents enriched with
/// resolved image URLs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "champions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub role: String,
    pub tags: Json,
    pub image_url: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub title: String,
    pub difficulty: i32,
    pub abilities: Json,
    pub passive: Json,
    pub ally_tips: Json,
    pub enemy_tips: Json,
    pub skins: Json,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
