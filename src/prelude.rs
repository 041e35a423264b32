pub use std::sync::Arc;

pub use chrono::{NaiveDateTime as DateTime, TimeDelta, Utc};
pub use migration::MigratorTrait;
pub use rust_decimal::{Decimal, RoundingStrategy};
pub use sea_orm::{
  ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait,
  QueryFilter, QueryOrder, Set, TransactionTrait,
};
pub use tracing::{debug, info};
pub use uuid::Uuid;

pub use crate::error::{Error, Result};

/// Round a money amount to 2 decimal places, half-up.
pub fn round_money(amount: Decimal) -> Decimal {
  amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
