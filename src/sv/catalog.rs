use crate::{
  entity::{DeadlineType, deadline, level, paper, writer_type},
  prelude::*,
};

pub struct Catalog<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Catalog<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create_paper(
    &self,
    name: &str,
    sort_order: i16,
  ) -> Result<paper::Model> {
    let row = paper::ActiveModel {
      id: Set(Uuid::new_v4()),
      name: Set(name.to_string()),
      sort_order: Set(sort_order),
      created_at: Set(Utc::now().naive_utc()),
    };

    Ok(row.insert(self.db).await?)
  }

  pub async fn create_level(
    &self,
    name: &str,
    sort_order: i16,
  ) -> Result<level::Model> {
    let row = level::ActiveModel {
      id: Set(Uuid::new_v4()),
      name: Set(name.to_string()),
      sort_order: Set(sort_order),
      created_at: Set(Utc::now().naive_utc()),
    };

    Ok(row.insert(self.db).await?)
  }

  pub async fn create_deadline(
    &self,
    value: i16,
    deadline_type: DeadlineType,
    sort_order: i16,
  ) -> Result<deadline::Model> {
    if value < 1 {
      return Err(Error::InvalidArgs("Deadline value must be positive".into()));
    }

    let exists = deadline::Entity::find()
      .filter(deadline::Column::Value.eq(value))
      .filter(deadline::Column::DeadlineType.eq(deadline_type))
      .one(self.db)
      .await?;

    if exists.is_some() {
      return Err(Error::InvalidArgs("Deadline already exists".into()));
    }

    let row = deadline::ActiveModel {
      id: Set(Uuid::new_v4()),
      value: Set(value),
      deadline_type: Set(deadline_type),
      sort_order: Set(sort_order),
      created_at: Set(Utc::now().naive_utc()),
    };

    Ok(row.insert(self.db).await?)
  }

  #[allow(dead_code)]
  pub async fn create_writer_type(
    &self,
    name: &str,
    description: Option<&str>,
    sort_order: i16,
  ) -> Result<writer_type::Model> {
    let row = writer_type::ActiveModel {
      id: Set(Uuid::new_v4()),
      name: Set(name.to_string()),
      description: Set(description.map(str::to_string)),
      sort_order: Set(sort_order),
      created_at: Set(Utc::now().naive_utc()),
    };

    Ok(row.insert(self.db).await?)
  }

  pub async fn papers(&self) -> Result<Vec<paper::Model>> {
    let papers = paper::Entity::find()
      .order_by_asc(paper::Column::SortOrder)
      .order_by_asc(paper::Column::Name)
      .all(self.db)
      .await?;
    Ok(papers)
  }

  pub async fn deadlines(&self) -> Result<Vec<deadline::Model>> {
    let deadlines = deadline::Entity::find()
      .order_by_asc(deadline::Column::SortOrder)
      .order_by_asc(deadline::Column::Value)
      .all(self.db)
      .await?;
    Ok(deadlines)
  }

  pub async fn levels(&self) -> Result<Vec<level::Model>> {
    let levels = level::Entity::find()
      .order_by_asc(level::Column::SortOrder)
      .order_by_asc(level::Column::Name)
      .all(self.db)
      .await?;
    Ok(levels)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sv::test_utils::test_db;

  #[tokio::test]
  async fn test_deadline_full_name() {
    let db = test_db::setup().await;
    let sv = Catalog::new(&db);

    let one = sv.create_deadline(1, DeadlineType::Hour, 0).await.unwrap();
    let many = sv.create_deadline(3, DeadlineType::Day, 1).await.unwrap();

    assert_eq!(one.full_name(), "1 Hour");
    assert_eq!(many.full_name(), "3 Days");
    assert_eq!(many.duration(), TimeDelta::days(3));
  }

  #[tokio::test]
  async fn test_duplicate_deadline_rejected() {
    let db = test_db::setup().await;
    let sv = Catalog::new(&db);

    sv.create_deadline(2, DeadlineType::Day, 0).await.unwrap();

    assert!(matches!(
      sv.create_deadline(2, DeadlineType::Day, 0).await,
      Err(Error::InvalidArgs(_))
    ));
  }
}
