#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use migration::MigratorTrait;
use configs::DatabaseConfig;
use models::{company, company_collection, db::{connect_with_config, DATABASE_URL}};
use uuid::Uuid;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    DatabaseConfig {
        url: DATABASE_URL.clone(),
        max_connections: 20,
        min_connections: 1,
        acquire_timeout_secs: 10,
        ..DatabaseConfig::default()
    }
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_init(|| async {
            let db = connect_with_config(&test_config()).await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    // Return a fresh connection for the current test's runtime
    let db = connect_with_config(&test_config()).await?;
    Ok(db)
}

/// Insert `n` companies with unique names and return their ids.
pub async fn seed_companies<C: ConnectionTrait>(db: &C, n: usize) -> Result<Vec<i32>, anyhow::Error> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let c = company::create(db, &format!("test_company_{}_{}", i, Uuid::new_v4())).await?;
        ids.push(c.id);
    }
    Ok(ids)
}

/// Insert `n` companies in one statement; for batches too large to seed row by row.
pub async fn seed_many_companies<C: ConnectionTrait>(db: &C, n: usize) -> Result<Vec<i32>, anyhow::Error> {
    let prefix = format!("bulk_company_{}_", Uuid::new_v4().simple());
    db.execute_unprepared(&format!(
        "INSERT INTO company (company_name) SELECT '{prefix}' || g FROM generate_series(1, {n}) AS g"
    ))
    .await?;
    let ids: Vec<i32> = company::Entity::find()
        .select_only()
        .column(company::Column::Id)
        .filter(company::Column::CompanyName.starts_with(prefix.as_str()))
        .order_by_asc(company::Column::Id)
        .into_tuple()
        .all(db)
        .await?;
    Ok(ids)
}

/// A collection with a unique name, so tests never see each other's rows.
pub async fn fresh_collection<C: ConnectionTrait>(db: &C) -> Result<company_collection::Model, anyhow::Error> {
    Ok(company_collection::create(db, &format!("test_collection_{}", Uuid::new_v4())).await?)
}
