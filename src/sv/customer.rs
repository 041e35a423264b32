use crate::{entity::customer, prelude::*};

pub struct Customers<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Customers<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  #[allow(dead_code)]
  pub async fn get_or_create(&self, email: &str) -> Result<customer::Model> {
    if let Some(customer) = customer::Entity::find()
      .filter(customer::Column::Email.eq(email))
      .one(self.db)
      .await?
    {
      return Ok(customer);
    }

    let row = customer::ActiveModel {
      id: Set(Uuid::new_v4()),
      email: Set(email.to_string()),
      created_at: Set(Utc::now().naive_utc()),
    };

    Ok(row.insert(self.db).await?)
  }

  pub async fn by_id(&self, id: Uuid) -> Result<Option<customer::Model>> {
    let customer = customer::Entity::find_by_id(id).one(self.db).await?;
    Ok(customer)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sv::test_utils::test_db;

  #[tokio::test]
  async fn test_get_or_create_is_idempotent() {
    let db = test_db::setup().await;
    let sv = Customers::new(&db);

    let a = sv.get_or_create("jo@example.com").await.unwrap();
    let b = sv.get_or_create("jo@example.com").await.unwrap();

    assert_eq!(a.id, b.id);
  }
}
