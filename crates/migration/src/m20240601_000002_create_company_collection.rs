//! Create `company_collection` table.
//!
//! Names are not unique; the seeded "Liked Companies List" is looked up by name.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyCollection::Table)
                    .if_not_exists()
                    .col(uuid(CompanyCollection::Id).primary_key())
                    .col(string_len(CompanyCollection::CollectionName, 256).not_null())
                    .col(
                        timestamp_with_time_zone(CompanyCollection::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_company_collection_name")
                    .table(CompanyCollection::Table)
                    .col(CompanyCollection::CollectionName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyCollection::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyCollection { Table, Id, CollectionName, CreatedAt }
