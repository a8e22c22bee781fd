use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::champion::ChampionSummaryDto;

/// A user account as exposed over the API. The password hash never leaves
/// the server.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub summoner_name: Option<String>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            avatar_url: user.avatar_url,
            bio: user.bio,
            summoner_name: user.summoner_name,
        }
    }
}

/// A public profile page: the account plus its favorited champions.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDto {
    pub user: UserDto,
    pub favorites: Vec<FavoriteDto>,
}

/// One favorited champion in a favorites listing.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub champion: ChampionSummaryDto,
}

/// A comment as shown in a user's comment history, carrying the champion
/// it was posted on.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserCommentDto {
    pub id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub champion_id: i32,
    pub champion_name: String,
}
