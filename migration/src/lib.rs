pub use sea_orm_migration::prelude::*;

mod m20260115_000001_champions;
mod m20260115_000002_users;
mod m20260115_000003_favorites;
mod m20260115_000004_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_champions::Migration),
            Box::new(m20260115_000002_users::Migration),
            Box::new(m20260115_000003_favorites::Migration),
            Box::new(m20260115_000004_comments::Migration),
        ]
    }
}
