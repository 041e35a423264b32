use crate::{
  entity::{OrderStatus, order},
  prelude::*,
  sv,
};

pub struct Orders<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Orders<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  #[allow(dead_code)]
  pub async fn create(
    &self,
    customer_id: Uuid,
    total: Decimal,
  ) -> Result<order::Model> {
    sv::Customers::new(self.db)
      .by_id(customer_id)
      .await?
      .ok_or(Error::CustomerNotFound)?;

    if total < Decimal::ZERO {
      return Err(Error::InvalidArgs("Total must not be negative".into()));
    }

    let row = order::ActiveModel {
      id: Set(Uuid::new_v4()),
      customer_id: Set(customer_id),
      status: Set(OrderStatus::Unpaid),
      total: Set(total),
      created_at: Set(Utc::now().naive_utc()),
    };

    Ok(row.insert(self.db).await?)
  }

  #[allow(dead_code)]
  pub async fn mark_paid(&self, order_id: Uuid) -> Result<order::Model> {
    let order = order::Entity::find_by_id(order_id)
      .one(self.db)
      .await?
      .ok_or(Error::OrderNotFound)?;

    let updated =
      order::ActiveModel { status: Set(OrderStatus::Paid), ..order.into() }
        .update(self.db)
        .await?;

    Ok(updated)
  }

  /// A customer is first-time while they have no PAID order. Derived from
  /// order history on every call, never cached.
  pub async fn is_first_time(&self, customer_id: Uuid) -> Result<bool> {
    let paid = order::Entity::find()
      .filter(order::Column::CustomerId.eq(customer_id))
      .filter(order::Column::Status.eq(OrderStatus::Paid))
      .one(self.db)
      .await?;

    Ok(paid.is_none())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sv::{Customers, test_utils::test_db};

  #[tokio::test]
  async fn test_first_time_flips_when_order_is_paid() {
    let db = test_db::setup().await;
    let sv = Orders::new(&db);
    let customer =
      Customers::new(&db).get_or_create("jo@example.com").await.unwrap();

    assert!(sv.is_first_time(customer.id).await.unwrap());

    let order =
      sv.create(customer.id, "45.00".parse().unwrap()).await.unwrap();
    assert!(sv.is_first_time(customer.id).await.unwrap());

    sv.mark_paid(order.id).await.unwrap();
    assert!(!sv.is_first_time(customer.id).await.unwrap());
  }

  #[tokio::test]
  async fn test_order_requires_existing_customer() {
    let db = test_db::setup().await;
    let sv = Orders::new(&db);

    assert!(matches!(
      sv.create(Uuid::new_v4(), "10.00".parse().unwrap()).await,
      Err(Error::CustomerNotFound)
    ));
  }
}
