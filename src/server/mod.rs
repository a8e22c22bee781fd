//! Server application core modules.
//!
//! This module contains all server-side functionality for LolDex, including
//! HTTP routing, session-based authentication, form validation, database
//! repositories, and the DDragon ingestion pipeline that mirrors the
//! champion catalog into the relational store.

pub mod config;
pub mod controller;
pub mod data;
pub mod ddragon;
pub mod error;
pub mod form;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
