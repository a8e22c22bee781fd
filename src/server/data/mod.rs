//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, organizing data access by domain (champions, users, and the
//! rows users own). Each repository is generic over [`ConnectionTrait`] so
//! services can run them against the pooled connection or inside a
//! transaction.
//!
//! [`ConnectionTrait`]: sea_orm::ConnectionTrait

pub mod champion;
pub mod comment;
pub mod favorite;
pub mod user;
