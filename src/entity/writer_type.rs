use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::writer_type_service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "writer_types")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub sort_order: i16,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "writer_type_service::Entity")]
  WriterPrices,
}

impl Related<writer_type_service::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::WriterPrices.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
