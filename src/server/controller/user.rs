use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{FavoriteDto, ProfileDto, UserCommentDto, UserDto},
    },
    server::{
        controller::{
            comment::comments_of, favorite::favorites_of, util::current_user::require_user,
        },
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        form::profile::ProfileEditForm,
        model::app::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Get a user's public profile
#[utoipa::path(
    get,
    path = "/api/profile/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Account username")
    ),
    responses(
        (status = 200, description = "The profile and its favorites", body = ProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let user = match user_repository.get_by_username(&username).await? {
        Some(user) => user,
        None => return Err(Error::NotFound("User not found")),
    };

    let favorites = favorites_of(&state.db, user.id).await?;

    Ok(Json(ProfileDto {
        user: user.into(),
        favorites,
    }))
}

/// Edit the logged in user's profile
///
/// Only the profile owner may edit; the ownership check runs against the
/// path before any lookup, so a 403 never reveals whether the target
/// username exists. Absent fields keep their current values.
#[utoipa::path(
    put,
    path = "/api/profile/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Account username")
    ),
    request_body = ProfileEditForm,
    responses(
        (status = 200, description = "The updated account", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the profile owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
    Json(form): Json<ProfileEditForm>,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let editor = require_user(
        &state.db,
        &session,
        "You must be logged in to edit a profile.",
    )
    .await?;

    if editor.username != username {
        return Err(AuthError::NotProfileOwner {
            editor: editor.username,
            target: username,
        }
        .into());
    }

    let (avatar_url, bio, summoner_name) = form.into_updates();

    let user = match user_repository
        .update_profile(editor.id, avatar_url, bio, summoner_name)
        .await?
    {
        Some(user) => user,
        None => return Err(Error::NotFound("User not found")),
    };

    tracing::info!("User {} updated their profile", user.username);

    Ok(Json(UserDto::from(user)))
}

/// Get a user's favorites
#[utoipa::path(
    get,
    path = "/api/profile/{username}/favorites",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Account username")
    ),
    responses(
        (status = 200, description = "The user's favorites, oldest first", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile_favorites(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let user = match user_repository.get_by_username(&username).await? {
        Some(user) => user,
        None => return Err(Error::NotFound("User not found")),
    };

    let favorites = favorites_of(&state.db, user.id).await?;

    Ok(Json(favorites))
}

/// Get a user's comment history
#[utoipa::path(
    get,
    path = "/api/profile/{username}/comments",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Account username")
    ),
    responses(
        (status = 200, description = "The user's comments, oldest first", body = Vec<UserCommentDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile_comments(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let user = match user_repository.get_by_username(&username).await? {
        Some(user) => user,
        None => return Err(Error::NotFound("User not found")),
    };

    let comments = comments_of(&state.db, user.id).await?;

    Ok(Json(comments))
}
