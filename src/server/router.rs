//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{model::api::ErrorDto, server::controller, server::model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which
/// are collected into a unified OpenAPI document. The router includes
/// Swagger UI at `/api/docs` for interactive API exploration, with the raw
/// specification at `/api/docs/openapi.json`. Requests that match no route
/// get a JSON 404 rather than an empty body.
///
/// # Registered Endpoints
/// - `POST /api/auth/signup` - Register an account and log it in
/// - `POST /api/auth/login` - Log in with username and password
/// - `GET  /api/auth/logout` - Log out the current user
/// - `GET  /api/auth/user` - Get current user information
/// - `GET  /api/champions` - List all champions
/// - `GET  /api/champions/{name}` - Get one champion's page data
/// - `POST /api/champions/{name}/comments` - Comment on a champion
/// - `GET  /api/search` - Search champions by name fragment
/// - `GET  /api/tags/{tag}` - List champions carrying a tag
/// - `POST /api/favorite/{champion_id}` - Toggle a favorite
/// - `GET  /api/favorites` - List own favorites
/// - `GET  /api/comments` - List own comments
/// - `GET  /api/profile/{username}` - Get a public profile
/// - `PUT  /api/profile/{username}` - Edit own profile
/// - `GET  /api/profile/{username}/favorites` - List a user's favorites
/// - `GET  /api/profile/{username}/comments` - List a user's comments
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be
/// given state and a session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "LolDex", description = "LolDex API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::champion::CHAMPION_TAG, description = "Champion catalog API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
        (name = controller::comment::COMMENT_TAG, description = "Comment API routes"),
        (name = controller::user::USER_TAG, description = "User profile API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::champion::get_champions))
        .routes(routes!(controller::champion::get_champion))
        .routes(routes!(controller::champion::search_champions))
        .routes(routes!(controller::champion::get_champions_by_tag))
        .routes(routes!(controller::favorite::toggle_favorite))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(controller::comment::create_comment))
        .routes(routes!(controller::comment::get_comments))
        .routes(routes!(
            controller::user::get_profile,
            controller::user::update_profile
        ))
        .routes(routes!(controller::user::get_profile_favorites))
        .routes(routes!(controller::user::get_profile_comments))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes.fallback(not_found)
}

/// JSON 404 for requests matching no registered route
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
