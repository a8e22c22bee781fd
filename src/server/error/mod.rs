//! Error types for the LolDex server application.
//!
//! This module provides specialized error types for the different domains
//! (authentication, configuration, ingestion, form validation). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait
//! implementations.

pub mod auth;
pub mod config;
pub mod ingest;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::{
        error::{auth::AuthError, config::ConfigError, ingest::IngestError},
        form::FormErrors,
    },
};

/// Main error type for the LolDex server application.
///
/// Aggregates all domain-specific error types and external library errors
/// into a single unified error type. `thiserror`'s `#[from]` attribute
/// enables automatic conversion from underlying error types via the `?`
/// operator; the `IntoResponse` implementation maps errors to appropriate
/// HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, credentials, ownership)
/// - Validation errors (rejected form fields)
/// - Ingestion errors (DDragon fetch or payload issues)
/// - External library errors (database, sessions, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credentials, profile ownership).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// One or more submitted form fields were rejected.
    #[error(transparent)]
    ValidationError(#[from] FormErrors),
    /// DDragon ingestion error (fetch failure, malformed payload).
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// A requested resource does not exist; the message is user-facing.
    #[error("{0}")]
    NotFound(&'static str),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// I/O error (socket binding, server runtime).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON
/// error responses. Errors without a specific mapping are treated as
/// internal server errors (500) with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(errors) => {
                tracing::debug!("{errors}");

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorDto {
                        errors: errors.into_map(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(message) => {
                tracing::debug!("{message}");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: message.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error"
/// body to the client to avoid leaking implementation details. Used as a
/// fallback for errors that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
