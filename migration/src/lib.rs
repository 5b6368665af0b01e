pub use sea_orm_migration::prelude::*;

mod m20251018_000001_create_maple_character_table;
mod m20251018_000002_create_meyoil_user_table;
mod m20251018_000003_create_meyoil_user_character_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_create_maple_character_table::Migration),
            Box::new(m20251018_000002_create_meyoil_user_table::Migration),
            Box::new(m20251018_000003_create_meyoil_user_character_table::Migration),
        ]
    }
}
