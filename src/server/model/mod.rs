//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including
//! application state, database model type aliases, ingestion row shapes,
//! and session data structures. These models bridge the gap between
//! database entities, HTTP handlers, and the ingestion job.

pub mod app;
pub mod db;
pub mod ingest;
pub mod session;
