//! Seed the two well-known collections ("My List", "Liked Companies List").
//! Inserts only when a collection with the same name is absent.
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

const SEEDED: [&str; 2] = ["My List", "Liked Companies List"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for name in SEEDED {
            let sql = format!(
                "INSERT INTO company_collection (id, collection_name) \
                 SELECT gen_random_uuid(), '{name}' \
                 WHERE NOT EXISTS (SELECT 1 FROM company_collection WHERE collection_name = '{name}')"
            );
            db.execute_unprepared(&sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(CompanyCollection::Table)
            .and_where(Expr::col(CompanyCollection::CollectionName).is_in(SEEDED))
            .to_owned();
        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum CompanyCollection { Table, CollectionName }
