//! Create `company_collection_association` table.
//! Join table between companies and collections; one row per (company, collection) pair.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyCollectionAssociation::Table)
                    .if_not_exists()
                    .col(pk_auto(CompanyCollectionAssociation::Id))
                    .col(integer(CompanyCollectionAssociation::CompanyId).not_null())
                    .col(uuid(CompanyCollectionAssociation::CollectionId).not_null())
                    .col(
                        timestamp_with_time_zone(CompanyCollectionAssociation::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_association_company")
                            .from(CompanyCollectionAssociation::Table, CompanyCollectionAssociation::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_association_collection")
                            .from(CompanyCollectionAssociation::Table, CompanyCollectionAssociation::CollectionId)
                            .to(CompanyCollection::Table, CompanyCollection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A company appears at most once per collection; add-liked relies on this for ON CONFLICT
        manager
            .create_index(
                Index::create()
                    .name("uniq_company_collection")
                    .table(CompanyCollectionAssociation::Table)
                    .col(CompanyCollectionAssociation::CompanyId)
                    .col(CompanyCollectionAssociation::CollectionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_association_collection")
                    .table(CompanyCollectionAssociation::Table)
                    .col(CompanyCollectionAssociation::CollectionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyCollectionAssociation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyCollectionAssociation { Table, Id, CompanyId, CollectionId, CreatedAt }

#[derive(DeriveIden)]
enum Company { Table, Id }

#[derive(DeriveIden)]
enum CompanyCollection { Table, Id }
