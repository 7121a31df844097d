pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_venue_table;
mod m20240101_000002_create_artist_table;
mod m20240101_000003_create_show_table;
mod m20240101_000004_create_genre_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_venue_table::Migration),
            Box::new(m20240101_000002_create_artist_table::Migration),
            Box::new(m20240101_000003_create_show_table::Migration),
            Box::new(m20240101_000004_create_genre_tables::Migration),
        ]
    }
}
