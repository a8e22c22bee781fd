pub use super::champion::Entity as Champion;
pub use super::comment::Entity as Comment;
pub use super::favorite::Entity as Favorite;
pub use super::user::Entity as User;
