//! Test fixture modules for database and HTTP mock creation.
//!
//! Each submodule provides specialized fixtures for one aspect of the
//! system:
//!
//! - `champion` - champion records in the test database
//! - `ddragon` - mocked DDragon CDN endpoints and payloads
//! - `user` - user records plus their favorites and comments

pub mod champion;
pub mod ddragon;
pub mod user;
