use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    /// Creates a new instance of [`CommentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a comment authored by a user on a champion
    ///
    /// Content length rules are enforced by form validation before this is
    /// ever called.
    pub async fn create(
        &self,
        user_id: i32,
        champion_id: i32,
        content: String,
    ) -> Result<entity::comment::Model, DbErr> {
        let comment = entity::comment::ActiveModel {
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            user_id: ActiveValue::Set(user_id),
            champion_id: ActiveValue::Set(champion_id),
            ..Default::default()
        };

        comment.insert(self.db).await
    }

    /// Gets a champion's comments joined with their authors, oldest first
    pub async fn get_many_by_champion_id(
        &self,
        champion_id: i32,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ChampionId.eq(champion_id))
            .find_also_related(entity::user::Entity)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user's comments joined with their champions, oldest first
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::champion::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .find_also_related(entity::champion::Entity)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }
}
