use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The route needs a logged-in user; `notice` is the user-facing
    /// message, which varies by route.
    #[error("login required: {notice}")]
    LoginRequired { notice: &'static str },
    #[error("username or password did not match a known account")]
    InvalidCredentials,
    #[error("username or email already registered")]
    CredentialsTaken,
    #[error("user {editor:?} attempted to edit profile of {target:?}")]
    NotProfileOwner { editor: String, target: String },
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::LoginRequired { notice } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: notice.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid credentials.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CredentialsTaken => {
                tracing::debug!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Username already taken".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotProfileOwner { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You are not authorized to edit this profile.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
