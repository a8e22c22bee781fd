use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite linking a user to a champion
    ///
    /// The favorites table carries a unique index over
    /// (user_id, champion_id); inserting a pair that already exists
    /// surfaces as a unique constraint violation.
    pub async fn create(
        &self,
        user_id: i32,
        champion_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            champion_id: ActiveValue::Set(champion_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    pub async fn get_by_user_and_champion(
        &self,
        user_id: i32,
        champion_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ChampionId.eq(champion_id))
            .one(self.db)
            .await
    }

    /// Gets a user's favorites joined with their champions, oldest first
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::favorite::Model, Option<entity::champion::Model>)>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .find_also_related(entity::champion::Entity)
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }
}
