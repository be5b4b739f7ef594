use sea_orm::{entity::prelude::*, sea_query::OnConflict, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{company, company_collection, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_collection_association")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub collection_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Company, Collection }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .into(),
            Relation::Collection => Entity::belongs_to(company_collection::Entity)
                .from(Column::CollectionId)
                .to(company_collection::Column::Id)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl Related<company_collection::Entity> for Entity {
    fn to() -> RelationDef { Relation::Collection.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Rows per INSERT; each row binds three parameters and Postgres allows 65535.
pub const INSERT_CHUNK: usize = 10_000;

/// Ids per `IN (...)` list when deleting.
pub const DELETE_CHUNK: usize = 30_000;

/// Insert one row per company id, skipping pairs that already exist.
///
/// Returns the number of rows actually written. Large batches are split into
/// several statements on the same connection, so run this inside a
/// transaction to keep the batch atomic. Callers should pass de-duplicated
/// ids; duplicates inside one statement are also skipped by the conflict
/// clause.
pub async fn insert_ignoring_existing<C: ConnectionTrait>(
    db: &C,
    collection_id: Uuid,
    company_ids: &[i32],
) -> Result<u64, errors::ModelError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut inserted = 0;
    for chunk in company_ids.chunks(INSERT_CHUNK) {
        let rows = chunk.iter().map(|&company_id| ActiveModel {
            company_id: Set(company_id),
            collection_id: Set(collection_id),
            created_at: Set(now),
            ..Default::default()
        });
        inserted += Entity::insert_many(rows)
            .on_conflict(
                OnConflict::columns([Column::CompanyId, Column::CollectionId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }
    Ok(inserted)
}

/// Delete the given companies from a collection; returns rows deleted.
pub async fn delete_companies<C: ConnectionTrait>(
    db: &C,
    collection_id: Uuid,
    company_ids: &[i32],
) -> Result<u64, errors::ModelError> {
    let mut deleted = 0;
    for chunk in company_ids.chunks(DELETE_CHUNK) {
        let res = Entity::delete_many()
            .filter(Column::CollectionId.eq(collection_id))
            .filter(Column::CompanyId.is_in(chunk.iter().copied()))
            .exec(db)
            .await?;
        deleted += res.rows_affected;
    }
    Ok(deleted)
}
