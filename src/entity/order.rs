use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::customer;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
  #[sea_orm(string_value = "unpaid")]
  #[default]
  Unpaid,
  #[sea_orm(string_value = "paid")]
  Paid,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub customer_id: Uuid,
  pub status: OrderStatus,
  pub total: Decimal,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "customer::Entity",
    from = "Column::CustomerId",
    to = "customer::Column::Id"
  )]
  Customer,
}

impl Related<customer::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Customer.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
