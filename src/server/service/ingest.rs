use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::Value;

use crate::server::{
    data::champion::{ChampionRepository, ChampionUpsert},
    ddragon,
    ddragon::model::ChampionDetail,
    error::Error,
    model::ingest::{ChampionSeed, IngestSummary},
};

pub struct IngestService<'a> {
    db: &'a DatabaseConnection,
    client: &'a ddragon::Client,
}

impl<'a> IngestService<'a> {
    /// Creates a new instance of [`IngestService`]
    pub fn new(db: &'a DatabaseConnection, client: &'a ddragon::Client) -> Self {
        Self { db, client }
    }

    /// Mirrors the DDragon champion catalog into the database
    ///
    /// Fetches the full roster and every detail document before touching
    /// storage; any fetch or decode failure aborts the run with nothing
    /// written. The batch then upserts inside one transaction, so a commit
    /// failure rolls the whole run back. Re-running against unchanged
    /// upstream data is a no-op.
    pub async fn sync_champions(&self) -> Result<IngestSummary, Error> {
        let names = self.client.champion_names().await?;

        tracing::info!("Fetched {} champions from DDragon", names.len());

        let mut seeds = Vec::with_capacity(names.len());
        for name in names {
            let detail = self.client.champion_detail(&name).await?;
            seeds.push(self.build_seed(name, detail));
        }

        let txn = self.db.begin().await?;
        let champion_repository = ChampionRepository::new(&txn);

        let mut summary = IngestSummary::default();
        for seed in seeds {
            match champion_repository.upsert(seed).await? {
                ChampionUpsert::Created(champion) => {
                    tracing::debug!("Created champion {}", champion.name);
                    summary.created += 1;
                }
                ChampionUpsert::Updated(champion) => {
                    tracing::debug!("Updated champion {}", champion.name);
                    summary.updated += 1;
                }
                ChampionUpsert::Unchanged(_) => summary.unchanged += 1,
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Champion sync complete: {} created, {} updated, {} unchanged",
            summary.created,
            summary.updated,
            summary.unchanged
        );

        Ok(summary)
    }

    /// Transform a detail document into the column values to upsert.
    fn build_seed(&self, name: String, detail: ChampionDetail) -> ChampionSeed {
        let role = detail.tags.first().cloned().unwrap_or_default();
        let image_url = self.client.splash_url(&detail.id, 0);

        let description = detail
            .lore
            .or(detail.blurb)
            .unwrap_or_else(|| "No description available".to_string());

        let abilities: Vec<Value> = detail
            .spells
            .into_iter()
            .map(|spell| self.with_image_url(spell))
            .collect();

        let passive = self.with_image_url(detail.passive);

        let skins: Vec<Value> = detail
            .skins
            .into_iter()
            .map(|skin| self.with_splash_url(&detail.id, skin))
            .collect();

        ChampionSeed {
            name,
            role,
            tags: detail.tags.into(),
            image_url,
            description,
            title: detail.title,
            difficulty: detail.info.difficulty.unwrap_or(0),
            abilities: abilities.into(),
            passive,
            ally_tips: detail.ally_tips.into(),
            enemy_tips: detail.enemy_tips.into(),
            skins: skins.into(),
        }
    }

    /// Resolve an ability or passive icon from its `image` sub-document and
    /// store the URL alongside it.
    fn with_image_url(&self, mut document: Value) -> Value {
        let image = document.get("image");
        let group = image
            .and_then(|image| image.get("group"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let full = image
            .and_then(|image| image.get("full"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let url = self.client.image_url(&group, &full);

        if let Some(document) = document.as_object_mut() {
            document.insert("image_url".to_string(), Value::String(url));
        }

        document
    }

    /// Store a skin's splash URL alongside it, derived from its `num`.
    fn with_splash_url(&self, champion_id: &str, mut skin: Value) -> Value {
        let num = skin.get("num").and_then(Value::as_i64).unwrap_or(0);

        let url = self.client.splash_url(champion_id, num);

        if let Some(skin) = skin.as_object_mut() {
            skin.insert("url".to_string(), Value::String(url));
        }

        skin
    }
}
