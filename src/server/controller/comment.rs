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
        api::{ErrorDto, ValidationErrorDto},
        champion::ChampionCommentDto,
        user::UserCommentDto,
    },
    server::{
        controller::util::current_user::require_user,
        data::{champion::ChampionRepository, comment::CommentRepository},
        error::Error,
        form::comment::CommentForm,
        model::app::AppState,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// Post a comment on a champion
#[utoipa::path(
    post,
    path = "/api/champions/{name}/comments",
    tag = COMMENT_TAG,
    params(
        ("name" = String, Path, description = "Champion name")
    ),
    request_body = CommentForm,
    responses(
        (status = 201, description = "The created comment", body = ChampionCommentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Champion not found", body = ErrorDto),
        (status = 422, description = "Comment content was rejected", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
    Json(form): Json<CommentForm>,
) -> Result<impl IntoResponse, Error> {
    let champion_repository = ChampionRepository::new(&state.db);
    let comment_repository = CommentRepository::new(&state.db);

    let user = require_user(&state.db, &session, "You must be logged in to comment.").await?;

    form.validate()?;

    let champion = match champion_repository.get_by_name(&name).await? {
        Some(champion) => champion,
        None => return Err(Error::NotFound("Champion not found")),
    };

    let comment = comment_repository
        .create(user.id, champion.id, form.content)
        .await?;

    tracing::info!("User {} commented on {}", user.username, champion.name);

    Ok((
        StatusCode::CREATED,
        Json(ChampionCommentDto {
            id: comment.id,
            content: comment.content,
            created_at: comment.created_at,
            user_id: user.id,
            username: user.username,
        }),
    ))
}

/// Get the logged in user's comments
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    responses(
        (status = 200, description = "The current user's comments, oldest first", body = Vec<UserCommentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(
        &state.db,
        &session,
        "You must be logged in to view your comments.",
    )
    .await?;

    let comments = comments_of(&state.db, user.id).await?;

    Ok(Json(comments))
}

/// Load a user's comment history joined with the champions commented on,
/// oldest first.
///
/// Shared with the profile routes.
pub(crate) async fn comments_of(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<UserCommentDto>, Error> {
    let comment_repository = CommentRepository::new(db);

    let comments = comment_repository
        .get_many_by_user_id(user_id)
        .await?
        .into_iter()
        .filter_map(|(comment, champion)| {
            champion.map(|champion| UserCommentDto {
                id: comment.id,
                content: comment.content,
                created_at: comment.created_at,
                champion_id: champion.id,
                champion_name: champion.name,
            })
        })
        .collect();

    Ok(comments)
}
