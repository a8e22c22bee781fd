//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main loldex crate to keep test code
//! consistent with the code under test.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the champion database model.
pub type ChampionModel = entity::champion::Model;

/// Type alias for the favorite database model.
pub type FavoriteModel = entity::favorite::Model;

/// Type alias for the comment database model.
pub type CommentModel = entity::comment::Model;
