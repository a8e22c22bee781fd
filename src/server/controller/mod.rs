//! HTTP controller endpoints for the LolDex web API.
//!
//! This module contains Axum handlers for authentication, the champion
//! catalog, favorites, comments, and user profiles. Controllers handle HTTP
//! requests, validate inputs, interact with services and repositories, and
//! return appropriate HTTP responses. They integrate with tower-sessions for
//! session management and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod champion;
pub mod comment;
pub mod favorite;
pub mod user;
pub mod util;
