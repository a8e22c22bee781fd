//! Typed wrappers around session-stored values.

pub mod user;
