use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// The password hash must already be a PHC string; hashing happens in
    /// the auth service, never here.
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
        avatar_url: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            avatar_url: ActiveValue::Set(avatar_url),
            bio: ActiveValue::Set(None),
            summoner_name: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates a user's profile fields
    ///
    /// `None` keeps the current value of a field. Returns `Ok(None)` when no
    /// user exists with the given ID.
    pub async fn update_profile(
        &self,
        user_id: i32,
        avatar_url: Option<String>,
        bio: Option<String>,
        summoner_name: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.clone().into_active_model();

        if let Some(avatar_url) = avatar_url {
            user_am.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        if let Some(bio) = bio {
            user_am.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(summoner_name) = summoner_name {
            user_am.summoner_name = ActiveValue::Set(Some(summoner_name));
        }

        // Updating with no dirty columns is a DbErr in sea-orm
        if !user_am.is_changed() {
            return Ok(Some(user));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
