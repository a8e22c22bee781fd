use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub session: Session,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Build any state type constructible from a database handle. This
    /// allows conversion to AppState without creating a circular
    /// dependency on the main crate.
    ///
    /// # Example
    /// ```ignore
    /// let state: AppState = setup.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            db,
            session,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Unique index over favorites (user_id, champion_id).
    ///
    /// `Schema::create_table_from_entity` does not emit composite unique
    /// indexes, so tests exercising the one-favorite-per-pair constraint
    /// apply this statement on top of the generated tables. The production
    /// migration creates the same index.
    pub fn favorites_unique_index() -> IndexCreateStatement {
        Index::create()
            .name("idx-favorites-user_id-champion_id")
            .table(entity::prelude::Favorite)
            .col(entity::favorite::Column::UserId)
            .col(entity::favorite::Column::ChampionId)
            .unique()
            .to_owned()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on every mock tracked by this setup to verify each
    /// was invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_all_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Champion),
                schema.create_table_from_entity(entity::prelude::Favorite),
                schema.create_table_from_entity(entity::prelude::Comment),
            ];
            setup.with_tables(stmts).await?;
            setup
                .with_indexes(vec![$crate::TestSetup::favorites_unique_index()])
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
