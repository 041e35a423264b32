use chrono::TimeDelta;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::service;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum DeadlineType {
  #[sea_orm(string_value = "hour")]
  Hour,
  #[sea_orm(string_value = "day")]
  #[default]
  Day,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "deadlines")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub value: i16,
  pub deadline_type: DeadlineType,
  pub sort_order: i16,
  pub created_at: DateTime,
}

impl Model {
  /// Display name combining the value and type, e.g. "3 Days".
  pub fn full_name(&self) -> String {
    let unit = match self.deadline_type {
      DeadlineType::Hour => "Hour",
      DeadlineType::Day => "Day",
    };
    let suffix = if self.value > 1 { "s" } else { "" };
    format!("{} {unit}{suffix}", self.value)
  }

  #[allow(dead_code)]
  pub fn duration(&self) -> TimeDelta {
    match self.deadline_type {
      DeadlineType::Hour => TimeDelta::hours(self.value as i64),
      DeadlineType::Day => TimeDelta::days(self.value as i64),
    }
  }
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
