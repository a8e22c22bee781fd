use serde_json::Value;

use crate::server::model::db::ChampionModel;

/// One champion's mapped column values, ready to upsert.
///
/// Built from a DDragon detail document by the ingestion transform; the
/// JSON fields already carry their derived image URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampionSeed {
    pub name: String,
    pub role: String,
    pub tags: Value,
    pub image_url: String,
    pub description: String,
    pub title: String,
    pub difficulty: i32,
    pub abilities: Value,
    pub passive: Value,
    pub ally_tips: Value,
    pub enemy_tips: Value,
    pub skins: Value,
}

impl ChampionSeed {
    /// True when every mapped column of `champion` already equals this
    /// seed. The upsert skips the write in that case, so `updated_at`
    /// only moves on real change.
    pub fn matches(&self, champion: &ChampionModel) -> bool {
        self.name == champion.name
            && self.role == champion.role
            && self.tags == champion.tags
            && self.image_url == champion.image_url
            && self.description == champion.description
            && self.title == champion.title
            && self.difficulty == champion.difficulty
            && self.abilities == champion.abilities
            && self.passive == champion.passive
            && self.ally_tips == champion.ally_tips
            && self.enemy_tips == champion.enemy_tips
            && self.skins == champion.skins
    }
}

/// Counts of what one champion sync run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
}
