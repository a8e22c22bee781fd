use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, error::Error};

/// Connect to the database without touching the schema
///
/// `loldex serve` relies on the schema already existing; only `loldex seed`
/// runs migrations.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Apply any pending database migrations
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), Error> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(db, None).await?;

    Ok(())
}

/// Configure cookie-backed session management
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;

    let session_store = MemoryStore::default();

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
