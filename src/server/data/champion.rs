use chrono::Utc;
use migration::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::ingest::ChampionSeed;

/// Outcome of upserting one champion seed.
#[derive(Debug, Clone, PartialEq)]
pub enum ChampionUpsert {
    Created(entity::champion::Model),
    Updated(entity::champion::Model),
    Unchanged(entity::champion::Model),
}

pub struct ChampionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChampionRepository<'a, C> {
    /// Creates a new instance of [`ChampionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a champion keyed by name
    ///
    /// Inserts when the name is unknown, rewrites the row when any mapped
    /// field differs, and leaves the row untouched when the seed already
    /// matches it. `updated_at` only advances on a real change.
    pub async fn upsert(&self, seed: ChampionSeed) -> Result<ChampionUpsert, DbErr> {
        let now = Utc::now().naive_utc();

        let champion = match self.get_by_name(&seed.name).await? {
            Some(champion) => champion,
            None => {
                let champion = entity::champion::ActiveModel {
                    name: ActiveValue::Set(seed.name),
                    role: ActiveValue::Set(seed.role),
                    tags: ActiveValue::Set(seed.tags),
                    image_url: ActiveValue::Set(seed.image_url),
                    description: ActiveValue::Set(seed.description),
                    title: ActiveValue::Set(seed.title),
                    difficulty: ActiveValue::Set(seed.difficulty),
                    abilities: ActiveValue::Set(seed.abilities),
                    passive: ActiveValue::Set(seed.passive),
                    ally_tips: ActiveValue::Set(seed.ally_tips),
                    enemy_tips: ActiveValue::Set(seed.enemy_tips),
                    skins: ActiveValue::Set(seed.skins),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                return Ok(ChampionUpsert::Created(champion.insert(self.db).await?));
            }
        };

        if seed.matches(&champion) {
            return Ok(ChampionUpsert::Unchanged(champion));
        }

        let mut champion_am = champion.into_active_model();
        champion_am.role = ActiveValue::Set(seed.role);
        champion_am.tags = ActiveValue::Set(seed.tags);
        champion_am.image_url = ActiveValue::Set(seed.image_url);
        champion_am.description = ActiveValue::Set(seed.description);
        champion_am.title = ActiveValue::Set(seed.title);
        champion_am.difficulty = ActiveValue::Set(seed.difficulty);
        champion_am.abilities = ActiveValue::Set(seed.abilities);
        champion_am.passive = ActiveValue::Set(seed.passive);
        champion_am.ally_tips = ActiveValue::Set(seed.ally_tips);
        champion_am.enemy_tips = ActiveValue::Set(seed.enemy_tips);
        champion_am.skins = ActiveValue::Set(seed.skins);
        champion_am.updated_at = ActiveValue::Set(now);

        Ok(ChampionUpsert::Updated(champion_am.update(self.db).await?))
    }

    /// Gets all champions ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::champion::Model>, DbErr> {
        entity::prelude::Champion::find()
            .order_by_asc(entity::champion::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        champion_id: i32,
    ) -> Result<Option<entity::champion::Model>, DbErr> {
        entity::prelude::Champion::find_by_id(champion_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::champion::Model>, DbErr> {
        entity::prelude::Champion::find()
            .filter(entity::champion::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Case-insensitive substring search on champion name
    pub async fn search_by_name(
        &self,
        query: &str,
    ) -> Result<Vec<entity::champion::Model>, DbErr> {
        entity::prelude::Champion::find()
            .filter(
                Func::lower(Expr::col(entity::champion::Column::Name))
                    .like(format!("%{}%", query.to_lowercase())),
            )
            .order_by_asc(entity::champion::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets all champions carrying the given tag
    ///
    /// Tags live in a JSON column, so rows are filtered on the decoded tag
    /// list after load. The mirrored catalog is ~170 rows.
    pub async fn get_many_by_tag(
        &self,
        tag: &str,
    ) -> Result<Vec<entity::champion::Model>, DbErr> {
        let champions = self.get_all().await?;

        Ok(champions
            .into_iter()
            .filter(|champion| {
                champion
                    .tags
                    .as_array()
                    .is_some_and(|tags| tags.iter().any(|t| t.as_str() == Some(tag)))
            })
            .collect())
    }
}
