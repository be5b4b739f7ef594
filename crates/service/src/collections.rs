//! Collection operations: metadata listing, paginated membership, and the
//! liked / "My List" add and remove flows.
//!
//! Reads accept any `ConnectionTrait`; writes open their own transaction on
//! the handle they are given and commit before returning, so an early `?`
//! drops the transaction and rolls it back.

use std::collections::HashSet;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::{
    company, company_collection, company_collection_association as assoc, LIKED_COLLECTION_NAME,
    MY_LIST_COLLECTION_NAME,
};

use crate::companies::{fetch_companies_with_liked, CompanyOutput};
use crate::errors::ServiceError;
use crate::pagination::{Pagination, MAX_SQL_WINDOW};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCollectionMetadata {
    pub id: Uuid,
    pub collection_name: String,
}

/// A collection with one page of its companies and the member count.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyCollectionOutput {
    pub id: Uuid,
    pub collection_name: String,
    pub companies: Vec<CompanyOutput>,
    pub total: u64,
}

/// Resolve a collection id by exact name (first match).
pub async fn collection_id_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Uuid, ServiceError> {
    company_collection::find_by_name(db, name)
        .await?
        .map(|c| c.id)
        .ok_or_else(|| ServiceError::not_found(name))
}

/// Id of the "Liked Companies List". Looked up on every call.
pub async fn liked_collection_id<C: ConnectionTrait>(db: &C) -> Result<Uuid, ServiceError> {
    collection_id_by_name(db, LIKED_COLLECTION_NAME).await
}

pub async fn list_collection_metadata<C: ConnectionTrait>(db: &C) -> Result<Vec<CompanyCollectionMetadata>, ServiceError> {
    let rows = company_collection::Entity::find().all(db).await?;
    Ok(rows
        .into_iter()
        .map(|c| CompanyCollectionMetadata { id: c.id, collection_name: c.collection_name })
        .collect())
}

async fn require_collection<C: ConnectionTrait>(db: &C, collection_id: Uuid) -> Result<company_collection::Model, ServiceError> {
    company_collection::Entity::find_by_id(collection_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Collection"))
}

/// One page of a collection's companies.
///
/// `total` counts every member regardless of the window. Members are ordered
/// by insertion so consecutive pages do not overlap.
#[instrument(skip(db, collection_id), fields(collection_id = %collection_id))]
pub async fn get_collection<C: ConnectionTrait>(
    db: &C,
    collection_id: Uuid,
    page: Pagination,
) -> Result<CompanyCollectionOutput, ServiceError> {
    let collection = require_collection(db, collection_id).await?;
    let page = page.normalize(MAX_SQL_WINDOW);

    let members = assoc::Entity::find()
        .inner_join(company::Entity)
        .filter(assoc::Column::CollectionId.eq(collection_id));

    let total = members.clone().count(db).await?;

    let ids: Vec<i32> = members
        .select_only()
        .column(assoc::Column::CompanyId)
        .order_by_asc(assoc::Column::Id)
        .offset(page.offset)
        .limit(page.limit)
        .into_tuple()
        .all(db)
        .await?;

    let companies = fetch_companies_with_liked(db, &ids).await?;

    Ok(CompanyCollectionOutput {
        id: collection.id,
        collection_name: collection.collection_name,
        companies,
        total,
    })
}

/// Every company id in a collection, in insertion order.
pub async fn company_ids_in_collection<C: ConnectionTrait>(db: &C, collection_id: Uuid) -> Result<Vec<i32>, ServiceError> {
    require_collection(db, collection_id).await?;
    let ids: Vec<i32> = assoc::Entity::find()
        .select_only()
        .column(assoc::Column::CompanyId)
        .filter(assoc::Column::CollectionId.eq(collection_id))
        .order_by_asc(assoc::Column::Id)
        .into_tuple()
        .all(db)
        .await?;
    Ok(ids)
}

/// Drop repeated ids, keeping first occurrence order.
pub fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Add companies to a collection by id; returns rows actually inserted.
#[instrument(skip(db, collection_id, company_ids), fields(collection_id = %collection_id, requested = company_ids.len()))]
pub async fn add_companies_to_collection<C: TransactionTrait>(
    db: &C,
    collection_id: Uuid,
    company_ids: &[i32],
) -> Result<u64, ServiceError> {
    let txn = db.begin().await?;
    require_collection(&txn, collection_id).await?;
    let inserted = assoc::insert_ignoring_existing(&txn, collection_id, &dedup_ids(company_ids)).await?;
    txn.commit().await?;
    info!(event = "collection_companies_added", %collection_id, inserted, "added companies to collection");
    Ok(inserted)
}

/// Add companies to the collection with the given name; returns rows actually inserted.
///
/// Name resolution and the insert share one transaction. Pairs that already
/// exist are skipped, so repeating a call changes nothing.
#[instrument(skip(db, company_ids), fields(requested = company_ids.len()))]
pub async fn add_companies_to_named_collection<C: TransactionTrait>(
    db: &C,
    collection_name: &str,
    company_ids: &[i32],
) -> Result<u64, ServiceError> {
    let txn = db.begin().await?;
    let collection_id = collection_id_by_name(&txn, collection_name).await?;
    let inserted = assoc::insert_ignoring_existing(&txn, collection_id, &dedup_ids(company_ids)).await?;
    txn.commit().await?;
    info!(event = "collection_companies_added", %collection_id, collection_name, inserted, "added companies to collection");
    Ok(inserted)
}

pub async fn add_companies_to_liked<C: TransactionTrait>(db: &C, company_ids: &[i32]) -> Result<u64, ServiceError> {
    add_companies_to_named_collection(db, LIKED_COLLECTION_NAME, company_ids).await
}

pub async fn add_companies_to_my_list<C: TransactionTrait>(db: &C, company_ids: &[i32]) -> Result<u64, ServiceError> {
    add_companies_to_named_collection(db, MY_LIST_COLLECTION_NAME, company_ids).await
}

/// Remove companies from the liked collection; returns rows deleted.
/// Ids that were not liked are ignored.
#[instrument(skip(db, company_ids), fields(requested = company_ids.len()))]
pub async fn remove_companies_from_liked<C: TransactionTrait>(db: &C, company_ids: &[i32]) -> Result<u64, ServiceError> {
    let txn = db.begin().await?;
    let liked_id = liked_collection_id(&txn).await?;
    let deleted = assoc::delete_companies(&txn, liked_id, company_ids).await?;
    txn.commit().await?;
    info!(event = "liked_companies_removed", collection_id = %liked_id, deleted, "removed companies from liked collection");
    Ok(deleted)
}
