//! Champion database insertion utilities.
//!
//! Provides methods for inserting champion records into the test database
//! and building in-memory champion models for unit tests.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

use crate::{error::TestError, model::ChampionModel, TestSetup};

impl TestSetup {
    pub fn champions(&mut self) -> ChampionFixtures<'_> {
        ChampionFixtures { setup: self }
    }
}

pub struct ChampionFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl ChampionFixtures<'_> {
    /// Create an in-memory champion model with standard test values.
    ///
    /// No database interaction; suitable for unit tests that only need a
    /// model instance.
    pub fn mock_champion_model(&self, name: &str) -> ChampionModel {
        let now = Utc::now().naive_utc();
        ChampionModel {
            id: 1,
            name: name.to_string(),
            role: "Fighter".to_string(),
            tags: json!(["Fighter", "Tank"]),
            image_url: format!(
                "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/{name}_0.jpg"
            ),
            description: format!("{name} is a champion of the rift."),
            title: "the Unyielding".to_string(),
            difficulty: 5,
            abilities: json!([]),
            passive: json!({}),
            ally_tips: json!([]),
            enemy_tips: json!([]),
            skins: json!([]),
            created_at: now,
            updated_at: now,
        }
    }

    /// Insert a mock champion with default tags and difficulty.
    ///
    /// If a champion with the given name already exists, returns the
    /// existing record instead of creating a duplicate.
    ///
    /// # Returns
    /// - `Ok(ChampionModel)` - The created or existing champion record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_champion(&self, name: &str) -> Result<ChampionModel, TestError> {
        self.insert_mock_champion_with(name, &["Fighter", "Tank"], 5)
            .await
    }

    /// Insert a mock champion with explicit tags and difficulty.
    ///
    /// If a champion with the given name already exists, returns the
    /// existing record instead of creating a duplicate.
    pub async fn insert_mock_champion_with(
        &self,
        name: &str,
        tags: &[&str],
        difficulty: i32,
    ) -> Result<ChampionModel, TestError> {
        if let Some(existing_champion) = entity::prelude::Champion::find()
            .filter(entity::champion::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_champion);
        }

        let template = self.mock_champion_model(name);
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Champion::insert(entity::champion::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                role: ActiveValue::Set(
                    tags.first().map(|tag| tag.to_string()).unwrap_or_default(),
                ),
                tags: ActiveValue::Set(json!(tags)),
                image_url: ActiveValue::Set(template.image_url),
                description: ActiveValue::Set(template.description),
                title: ActiveValue::Set(template.title),
                difficulty: ActiveValue::Set(difficulty),
                abilities: ActiveValue::Set(template.abilities),
                passive: ActiveValue::Set(template.passive),
                ally_tips: ActiveValue::Set(template.ally_tips),
                enemy_tips: ActiveValue::Set(template.enemy_tips),
                skins: ActiveValue::Set(template.skins),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
