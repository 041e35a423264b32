use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{deadline, level, paper, writer_type_service};

/// Price-per-page rule for a `(paper, deadline, level)` combination.
/// A NULL level makes the rule apply to any level of the paper.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub paper_id: Uuid,
  pub deadline_id: Uuid,
  pub level_id: Option<Uuid>,
  pub amount: Decimal,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "paper::Entity",
    from = "Column::PaperId",
    to = "paper::Column::Id"
  )]
  Paper,
  #[sea_orm(
    belongs_to = "deadline::Entity",
    from = "Column::DeadlineId",
    to = "deadline::Column::Id"
  )]
  Deadline,
  #[sea_orm(
    belongs_to = "level::Entity",
    from = "Column::LevelId",
    to = "level::Column::Id"
  )]
  Level,
  #[sea_orm(has_many = "writer_type_service::Entity")]
  WriterPrices,
}

impl Related<paper::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Paper.def()
  }
}

impl Related<deadline::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Deadline.def()
  }
}

impl Related<level::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Level.def()
  }
}

impl Related<writer_type_service::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::WriterPrices.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
