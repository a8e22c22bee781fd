//! Database model type aliases.
//!
//! Convenient aliases for SeaORM entity models used throughout the
//! application. They simplify type signatures and give a single point of
//! reference for database model types without importing from the `entity`
//! crate directly.

/// Type alias for the user database model.
///
/// A registered account: unique `username` and `email`, an Argon2id
/// `password_hash`, and optional profile fields (`avatar_url`, `bio`,
/// `summoner_name`).
pub type UserModel = entity::user::Model;

/// Type alias for the champion database model.
///
/// A champion mirrored from DDragon. `name` is the unique upsert key;
/// `updated_at` only advances when ingestion writes a real change.
pub type ChampionModel = entity::champion::Model;

/// Type alias for the favorite database model.
///
/// Links a user to a champion; at most one row per (user, champion) pair.
pub type FavoriteModel = entity::favorite::Model;

/// Type alias for the comment database model.
pub type CommentModel = entity::comment::Model;
