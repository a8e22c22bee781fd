use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while mirroring champion data from the DDragon CDN.
///
/// Ingestion runs as an operator command, so these normally surface on the
/// CLI rather than over HTTP; the `IntoResponse` impl exists for the error
/// aggregate and maps everything to a 500.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("champion {0:?} missing from its DDragon detail response")]
    MissingDetail(String),
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
