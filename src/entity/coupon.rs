use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum CouponType {
  #[sea_orm(string_value = "regular")]
  #[default]
  Regular,
  #[sea_orm(string_value = "first_timer")]
  FirstTimer,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  #[sea_orm(unique)]
  pub code: String,
  pub coupon_type: CouponType,
  pub percent_off: i16,
  pub minimum: Option<Decimal>,
  pub start_date: DateTime,
  pub end_date: DateTime,
  pub created_at: DateTime,
}

impl Model {
  /// Validity window is inclusive on both ends.
  #[allow(dead_code)]
  pub fn is_active(&self, now: DateTime) -> bool {
    self.start_date <= now && now <= self.end_date
  }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
