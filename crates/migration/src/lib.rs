//! Migrator registering entity-specific migrations in dependency order.
//! Seed rows are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_company;
mod m20240601_000002_create_company_collection;
mod m20240601_000003_create_company_collection_association;
mod m20240601_000004_seed_collections;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_company::Migration),
            Box::new(m20240601_000002_create_company_collection::Migration),
            Box::new(m20240601_000003_create_company_collection_association::Migration),
            Box::new(m20240601_000004_seed_collections::Migration),
        ]
    }
}
