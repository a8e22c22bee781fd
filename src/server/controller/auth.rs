use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::UserDto,
    },
    server::{
        controller::util::current_user::require_user,
        error::{auth::AuthError, Error},
        form::{login::LoginForm, signup::SignupForm},
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account and log it in
///
/// The new user is stored with an Argon2 password hash and their session
/// is established immediately, no separate login needed.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupForm,
    responses(
        (status = 201, description = "Account created and logged in", body = UserDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 422, description = "One or more fields were rejected", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<SignupForm>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.signup(form).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginForm,
    responses(
        (status = 200, description = "Credentials accepted, session established", body = UserDto),
        (status = 401, description = "Username or password did not match", body = ErrorDto),
        (status = 422, description = "One or more fields were rejected", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    form.validate()?;

    let user = match auth_service
        .authenticate(&form.username, &form.password)
        .await?
    {
        Some(user) => user,
        None => return Err(AuthError::InvalidCredentials.into()),
    };

    SessionUserId::insert(&session, user.id).await?;

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(UserDto::from(user)))
}

/// Log the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the homepage"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear the session when one actually exists; clearing a session
    // that was never created errors out as a 500
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Get the currently logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The current session's account", body = UserDto),
        (status = 401, description = "No logged in user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state.db, &session, "Not logged in.").await?;

    Ok(Json(UserDto::from(user)))
}
