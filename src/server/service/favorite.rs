use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{data::favorite::FavoriteRepository, error::Error};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles a user's favorite for a champion, returning the new state
    ///
    /// Read-then-branch runs in one transaction. A concurrent toggle that
    /// wins the insert race trips the (user_id, champion_id) unique index;
    /// that outcome means the champion is favorited, so it is answered as
    /// `true` rather than surfaced as a failure.
    pub async fn toggle(&self, user_id: i32, champion_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let favorite_repository = FavoriteRepository::new(&txn);

        let existing = favorite_repository
            .get_by_user_and_champion(user_id, champion_id)
            .await?;

        match existing {
            Some(favorite) => {
                favorite_repository.delete(favorite.id).await?;
                txn.commit().await?;

                Ok(false)
            }
            None => match favorite_repository.create(user_id, champion_id).await {
                Ok(_) => {
                    txn.commit().await?;

                    Ok(true)
                }
                Err(err) if already_favorited(&err) => {
                    // The failed insert poisons the transaction; it cannot commit
                    txn.rollback().await?;

                    Ok(true)
                }
                Err(err) => Err(err.into()),
            },
        }
    }
}

/// True when an insert failed because the (user, champion) pair already
/// holds a favorite.
fn already_favorited(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
