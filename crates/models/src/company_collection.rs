use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{company_collection_association, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_collection")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub collection_name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Associations }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Associations => Entity::has_many(company_collection_association::Entity).into(),
        }
    }
}

impl Related<company_collection_association::Entity> for Entity {
    fn to() -> RelationDef { Relation::Associations.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("collection_name required".into()));
    }
    if name.len() > 256 {
        return Err(errors::ModelError::Validation("collection_name too long (<=256)".into()));
    }
    Ok(())
}

/// Insert a collection. The API never creates collections; seeding and tests do.
pub async fn create<C: ConnectionTrait>(db: &C, collection_name: &str) -> Result<Model, errors::ModelError> {
    validate_name(collection_name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        collection_name: Set(collection_name.to_string()),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

/// First collection whose name matches exactly.
pub async fn find_by_name<C: ConnectionTrait>(db: &C, collection_name: &str) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::CollectionName.eq(collection_name))
        .one(db)
        .await?;
    Ok(found)
}
