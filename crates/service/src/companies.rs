//! Company listing enriched with the per-company "liked" flag.

use std::collections::{HashMap, HashSet};

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use tracing::{debug, instrument};

use models::{company, company_collection, company_collection_association as assoc, LIKED_COLLECTION_NAME};

use crate::errors::ServiceError;
use crate::pagination::{Pagination, MAX_SQL_WINDOW};

/// A company as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyOutput {
    pub id: i32,
    pub company_name: String,
    pub liked: bool,
}

/// One page of companies and the unpaginated count.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyBatchOutput {
    pub companies: Vec<CompanyOutput>,
    pub total: u64,
}

/// Load companies by id and mark the ones present in the liked collection.
///
/// Output follows the order of `company_ids`; ids with no company row are
/// skipped and repeated ids appear once. A missing liked collection means
/// nothing is liked.
#[instrument(skip(db, company_ids), fields(requested = company_ids.len()))]
pub async fn fetch_companies_with_liked<C: ConnectionTrait>(
    db: &C,
    company_ids: &[i32],
) -> Result<Vec<CompanyOutput>, ServiceError> {
    if company_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_id: HashMap<i32, company::Model> = company::Entity::find()
        .filter(company::Column::Id.is_in(company_ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let liked: HashSet<i32> = match company_collection::find_by_name(db, LIKED_COLLECTION_NAME).await? {
        Some(liked_collection) => assoc::Entity::find()
            .select_only()
            .column(assoc::Column::CompanyId)
            .filter(assoc::Column::CollectionId.eq(liked_collection.id))
            .filter(assoc::Column::CompanyId.is_in(company_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(db)
            .await?
            .into_iter()
            .collect(),
        None => {
            debug!(event = "liked_collection_missing", "no liked collection; all companies unliked");
            HashSet::new()
        }
    };

    let out = company_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .map(|c| CompanyOutput { liked: liked.contains(&c.id), id: c.id, company_name: c.company_name })
        .collect();
    Ok(out)
}

/// Page through all companies ordered by id.
#[instrument(skip(db))]
pub async fn list_companies<C: ConnectionTrait>(db: &C, page: Pagination) -> Result<CompanyBatchOutput, ServiceError> {
    let page = page.normalize(MAX_SQL_WINDOW);
    let total = company::Entity::find().count(db).await?;
    let ids: Vec<i32> = company::Entity::find()
        .select_only()
        .column(company::Column::Id)
        .order_by_asc(company::Column::Id)
        .offset(page.offset)
        .limit(page.limit)
        .into_tuple()
        .all(db)
        .await?;
    let companies = fetch_companies_with_liked(db, &ids).await?;
    Ok(CompanyBatchOutput { companies, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_companies};
    use sea_orm::{ActiveModelTrait, Set, TransactionTrait};

    #[tokio::test]
    async fn enrichment_marks_liked_and_keeps_input_order() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let txn = db.begin().await?;

        let ids = seed_companies(&txn, 3).await?;
        let liked = company_collection::find_by_name(&txn, LIKED_COLLECTION_NAME).await?.unwrap();
        assoc::insert_ignoring_existing(&txn, liked.id, &[ids[1]]).await?;

        let requested = vec![ids[2], ids[0], ids[1], ids[2], -42];
        let out = fetch_companies_with_liked(&txn, &requested).await?;
        let got: Vec<(i32, bool)> = out.iter().map(|c| (c.id, c.liked)).collect();
        assert_eq!(got, vec![(ids[2], false), (ids[0], false), (ids[1], true)]);

        txn.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    async fn enrichment_treats_missing_liked_collection_as_unliked() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let txn = db.begin().await?;

        let ids = seed_companies(&txn, 1).await?;
        let liked = company_collection::find_by_name(&txn, LIKED_COLLECTION_NAME).await?.unwrap();
        assoc::insert_ignoring_existing(&txn, liked.id, &ids).await?;

        // Rename inside the transaction so the lookup by name fails
        let mut am: company_collection::ActiveModel = liked.into();
        am.collection_name = Set("renamed for test".into());
        am.update(&txn).await?;

        let out = fetch_companies_with_liked(&txn, &ids).await?;
        assert_eq!(out.len(), 1);
        assert!(!out[0].liked);

        txn.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_companies_pages_by_id() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let txn = db.begin().await?;

        seed_companies(&txn, 3).await?;
        let first = list_companies(&txn, Pagination::new(0, 2)).await?;
        assert!(first.total >= 3);
        assert_eq!(first.companies.len(), 2);
        assert!(first.companies[0].id < first.companies[1].id);

        let past_end = list_companies(&txn, Pagination::new(first.total + 1_000_000, 10)).await?;
        assert!(past_end.companies.is_empty());
        assert!(past_end.total >= first.total);

        let huge = list_companies(&txn, Pagination::new(u64::MAX, 10)).await?;
        assert!(huge.companies.is_empty());

        txn.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    async fn empty_id_list_skips_queries() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        assert!(fetch_companies_with_liked(&db, &[]).await?.is_empty());
        Ok(())
    }
}
