use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::session::user::SessionUserId,
};

/// Resolve the session's user against the database, if any
///
/// A session naming a user ID that no longer exists in the database is
/// cleared and treated as anonymous, so the stale cookie heals itself on
/// the next request.
pub async fn maybe_user(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<Option<entity::user::Model>, Error> {
    let user_repository = UserRepository::new(db);

    let user_id = match SessionUserId::get(session).await? {
        Some(user_id) => user_id,
        None => return Ok(None),
    };

    match user_repository.get_by_id(user_id).await? {
        Some(user) => Ok(Some(user)),
        None => {
            session.clear().await;

            tracing::warn!(
                "Failed to find user ID {} in database despite having an active session;
                cleared session for user, they will need to log in again to fix",
                user_id
            );

            Ok(None)
        }
    }
}

/// Resolve the session's user or reject the request with a 401
///
/// `notice` is the user-facing message carried by the rejection; routes
/// word it for their own context.
pub async fn require_user(
    db: &DatabaseConnection,
    session: &Session,
    notice: &'static str,
) -> Result<entity::user::Model, Error> {
    match maybe_user(db, session).await? {
        Some(user) => Ok(user),
        None => Err(AuthError::LoginRequired { notice }.into()),
    }
}
