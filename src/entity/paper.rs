use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "papers")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub name: String,
  pub sort_order: i16,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "service::Entity")]
  Services,
}

impl Related<service::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Services.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
