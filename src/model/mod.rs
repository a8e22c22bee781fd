//! Data transfer models shared across API surfaces.
//!
//! These are the JSON shapes the HTTP API speaks. Database entities are
//! converted into these DTOs at the controller/service boundary so the
//! wire format stays decoupled from the schema.

pub mod api;
pub mod champion;
pub mod user;
