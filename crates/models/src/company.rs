use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{company_collection_association, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: String,
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
        return Err(errors::ModelError::Validation("company_name required".into()));
    }
    Ok(())
}

/// Insert a company; the id comes from the serial column.
pub async fn create<C: ConnectionTrait>(db: &C, company_name: &str) -> Result<Model, errors::ModelError> {
    validate_name(company_name)?;
    let am = ActiveModel {
        company_name: Set(company_name.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
