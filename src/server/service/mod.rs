//! Business logic services.
//!
//! Services coordinate repositories, external fetches, and error
//! translation for the controllers. Multi-statement writes run inside a
//! transaction here rather than in the data layer.

pub mod auth;
pub mod favorite;
pub mod ingest;
