use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        champion::{FavoriteStatusDto, FavoriteUnauthenticatedDto},
        user::FavoriteDto,
    },
    server::{
        controller::util::current_user::{maybe_user, require_user},
        data::{champion::ChampionRepository, favorite::FavoriteRepository},
        error::Error,
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Toggle a favorite on a champion
///
/// Anonymous requests get a 401 body carrying `is_authenticated: false`
/// instead of the standard error shape so the page script can prompt a
/// login without parsing failures.
#[utoipa::path(
    post,
    path = "/api/favorite/{champion_id}",
    tag = FAVORITE_TAG,
    params(
        ("champion_id" = i32, Path, description = "Champion ID")
    ),
    responses(
        (status = 200, description = "The new favorite state for the champion", body = FavoriteStatusDto),
        (status = 401, description = "Not logged in", body = FavoriteUnauthenticatedDto),
        (status = 404, description = "Champion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(champion_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let champion_repository = ChampionRepository::new(&state.db);
    let favorite_service = FavoriteService::new(&state.db);

    let user = match maybe_user(&state.db, &session).await? {
        Some(user) => user,
        None => {
            return Ok((
                StatusCode::UNAUTHORIZED,
                Json(FavoriteUnauthenticatedDto {
                    message: "User not authenticated".to_string(),
                    is_authenticated: false,
                }),
            )
                .into_response())
        }
    };

    if champion_repository.get_by_id(champion_id).await?.is_none() {
        return Err(Error::NotFound("Champion not found"));
    }

    let is_favorited = favorite_service.toggle(user.id, champion_id).await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteStatusDto {
            is_favorited,
            is_authenticated: true,
        }),
    )
        .into_response())
}

/// Get the logged in user's favorites
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "The current user's favorites, oldest first", body = Vec<FavoriteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(
        &state.db,
        &session,
        "You must be logged in to view your favorites.",
    )
    .await?;

    let favorites = favorites_of(&state.db, user.id).await?;

    Ok(Json(favorites))
}

/// Load a user's favorites joined with their champions, oldest first.
///
/// Shared with the profile routes, which list favorites for users other
/// than the session's own.
pub(crate) async fn favorites_of(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<FavoriteDto>, Error> {
    let favorite_repository = FavoriteRepository::new(db);

    let favorites = favorite_repository
        .get_many_by_user_id(user_id)
        .await?
        .into_iter()
        .filter_map(|(favorite, champion)| {
            champion.map(|champion| FavoriteDto {
                id: favorite.id,
                champion: champion.into(),
            })
        })
        .collect();

    Ok(favorites)
}
