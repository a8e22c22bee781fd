//! User, favorite, and comment database insertion utilities.
//!
//! Provides methods for inserting user records and user-owned rows
//! (favorites, comments) into the test database. Inserted users carry a
//! placeholder password hash; tests that exercise credential verification
//! should create users through the auth service instead.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{CommentModel, FavoriteModel, UserModel},
    TestSetup,
};

impl TestSetup {
    pub fn users(&mut self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl UserFixtures<'_> {
    /// Insert a mock user with a placeholder password hash.
    ///
    /// If a user with the given username already exists, returns the
    /// existing record instead of creating a duplicate. The email is
    /// derived from the username.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created or existing user record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_user(&self, username: &str) -> Result<UserModel, TestError> {
        if let Some(existing_user) = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_user);
        }

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(format!("{}@example.com", username.to_lowercase())),
            password_hash: ActiveValue::Set("not-a-real-hash".to_string()),
            avatar_url: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            summoner_name: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a favorite row linking a user to a champion.
    pub async fn insert_mock_favorite(
        &self,
        user_id: i32,
        champion_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                champion_id: ActiveValue::Set(champion_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a comment row authored by a user on a champion.
    pub async fn insert_mock_comment(
        &self,
        user_id: i32,
        champion_id: i32,
        content: &str,
    ) -> Result<CommentModel, TestError> {
        Ok(entity::prelude::Comment::insert(entity::comment::ActiveModel {
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            user_id: ActiveValue::Set(user_id),
            champion_id: ActiveValue::Set(champion_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
