use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Champion card data for roster listings, search, and tag pages.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChampionSummaryDto {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub role: String,
    /// DDragon tags, e.g. `["Fighter", "Tank"]`
    pub tags: Value,
    pub image_url: String,
    pub difficulty: i32,
}

impl From<entity::champion::Model> for ChampionSummaryDto {
    fn from(champion: entity::champion::Model) -> Self {
        Self {
            id: champion.id,
            name: champion.name,
            title: champion.title,
            role: champion.role,
            tags: champion.tags,
            image_url: champion.image_url,
            difficulty: champion.difficulty,
        }
    }
}

/// Everything a champion page needs, including viewer-specific favorite
/// state and the champion's comment thread.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChampionDetailDto {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub role: String,
    pub tags: Value,
    pub image_url: String,
    pub description: String,
    pub difficulty: i32,
    /// Difficulty scaled to 0-100 for meter rendering
    pub difficulty_percentage: i32,
    pub abilities: Value,
    pub passive: Value,
    pub ally_tips: Value,
    pub enemy_tips: Value,
    pub skins: Value,
    /// Whether the requesting user has favorited this champion; always
    /// false for anonymous viewers
    pub is_favorited: bool,
    pub comments: Vec<ChampionCommentDto>,
}

impl ChampionDetailDto {
    pub fn new(
        champion: entity::champion::Model,
        is_favorited: bool,
        comments: Vec<ChampionCommentDto>,
    ) -> Self {
        Self {
            id: champion.id,
            name: champion.name,
            title: champion.title,
            role: champion.role,
            tags: champion.tags,
            image_url: champion.image_url,
            description: champion.description,
            difficulty: champion.difficulty,
            difficulty_percentage: champion.difficulty * 10,
            abilities: champion.abilities,
            passive: champion.passive,
            ally_tips: champion.ally_tips,
            enemy_tips: champion.enemy_tips,
            skins: champion.skins,
            is_favorited,
            comments,
        }
    }
}

/// A comment as shown on a champion page.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChampionCommentDto {
    pub id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
    pub username: String,
}

/// The response after toggling a favorite.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteStatusDto {
    /// The new favorite state for the (user, champion) pair
    pub is_favorited: bool,
    pub is_authenticated: bool,
}

/// The response when an anonymous request tries to toggle a favorite.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteUnauthenticatedDto {
    pub message: String,
    pub is_authenticated: bool,
}
