use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{service, writer_type};

/// Flat per-page surcharge charged when a writer type is selected for
/// a pricing rule. At most one row per `(writer_type, service)` pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "writer_type_services")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub writer_type_id: Uuid,
  pub service_id: Uuid,
  pub amount: Decimal,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "writer_type::Entity",
    from = "Column::WriterTypeId",
    to = "writer_type::Column::Id"
  )]
  WriterType,
  #[sea_orm(
    belongs_to = "service::Entity",
    from = "Column::ServiceId",
    to = "service::Column::Id"
  )]
  Service,
}

impl Related<writer_type::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::WriterType.def()
  }
}

impl Related<service::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Service.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
