use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        champion::{ChampionCommentDto, ChampionDetailDto, ChampionSummaryDto},
    },
    server::{
        controller::util::current_user::maybe_user,
        data::{
            champion::ChampionRepository, comment::CommentRepository,
            favorite::FavoriteRepository,
        },
        error::Error,
        model::app::AppState,
    },
};

pub static CHAMPION_TAG: &str = "champion";

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Get all champions ordered by name
#[utoipa::path(
    get,
    path = "/api/champions",
    tag = CHAMPION_TAG,
    responses(
        (status = 200, description = "Every champion in the catalog", body = Vec<ChampionSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_champions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let champion_repository = ChampionRepository::new(&state.db);

    let champions: Vec<ChampionSummaryDto> = champion_repository
        .get_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(champions))
}

/// Get one champion's full page data
///
/// Includes the champion's comment thread and whether the requesting
/// session has favorited it; anonymous viewers always see `is_favorited`
/// as false.
#[utoipa::path(
    get,
    path = "/api/champions/{name}",
    tag = CHAMPION_TAG,
    params(
        ("name" = String, Path, description = "Champion name")
    ),
    responses(
        (status = 200, description = "The champion's page data", body = ChampionDetailDto),
        (status = 404, description = "Champion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_champion(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let champion_repository = ChampionRepository::new(&state.db);
    let favorite_repository = FavoriteRepository::new(&state.db);
    let comment_repository = CommentRepository::new(&state.db);

    let champion = match champion_repository.get_by_name(&name).await? {
        Some(champion) => champion,
        None => return Err(Error::NotFound("Champion not found")),
    };

    let viewer = maybe_user(&state.db, &session).await?;

    let is_favorited = match &viewer {
        Some(user) => favorite_repository
            .get_by_user_and_champion(user.id, champion.id)
            .await?
            .is_some(),
        None => false,
    };

    let comments: Vec<ChampionCommentDto> = comment_repository
        .get_many_by_champion_id(champion.id)
        .await?
        .into_iter()
        .map(|(comment, author)| ChampionCommentDto {
            id: comment.id,
            content: comment.content,
            created_at: comment.created_at,
            user_id: comment.user_id,
            username: author.map(|author| author.username).unwrap_or_default(),
        })
        .collect();

    Ok(Json(ChampionDetailDto::new(champion, is_favorited, comments)))
}

/// Search champions by name fragment
///
/// Case-insensitive substring match; an empty or missing query returns an
/// empty list rather than an error.
#[utoipa::path(
    get,
    path = "/api/search",
    tag = CHAMPION_TAG,
    params(
        ("q" = Option<String>, Query, description = "Name fragment to match")
    ),
    responses(
        (status = 200, description = "Names of champions matching the query", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_champions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let champion_repository = ChampionRepository::new(&state.db);

    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let names: Vec<String> = champion_repository
        .search_by_name(&query)
        .await?
        .into_iter()
        .map(|champion| champion.name)
        .collect();

    Ok(Json(names))
}

/// Get all champions carrying a tag
#[utoipa::path(
    get,
    path = "/api/tags/{tag}",
    tag = CHAMPION_TAG,
    params(
        ("tag" = String, Path, description = "DDragon tag, e.g. Fighter")
    ),
    responses(
        (status = 200, description = "Champions carrying the tag", body = Vec<ChampionSummaryDto>),
        (status = 404, description = "No champions carry the tag", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_champions_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let champion_repository = ChampionRepository::new(&state.db);

    let champions = champion_repository.get_many_by_tag(&tag).await?;
    if champions.is_empty() {
        return Err(Error::NotFound("No champions found for this tag"));
    }

    let champions: Vec<ChampionSummaryDto> = champions.into_iter().map(Into::into).collect();

    Ok(Json(champions))
}
