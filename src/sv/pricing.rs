use std::collections::HashSet;

use crate::{
  entity::{deadline, level, paper, service, writer_type, writer_type_service},
  prelude::*,
};

pub struct Pricing<'a> {
  db: &'a DatabaseConnection,
}

/// One row of a bulk price replacement for a paper.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct PriceEntry {
  pub deadline_id: Uuid,
  #[serde(default)]
  pub level_id: Option<Uuid>,
  pub amount: Decimal,
}

impl<'a> Pricing<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Find the most specific pricing rule for `(paper, deadline, level)`.
  ///
  /// An exact-level rule wins when a level is supplied; otherwise the
  /// level-agnostic fallback row (NULL level) is used.
  pub async fn resolve(
    &self,
    paper: Uuid,
    deadline: Uuid,
    level: Option<Uuid>,
  ) -> Result<service::Model> {
    if let Some(level) = level
      && let Some(rule) = service::Entity::find()
        .filter(service::Column::PaperId.eq(paper))
        .filter(service::Column::DeadlineId.eq(deadline))
        .filter(service::Column::LevelId.eq(level))
        .one(self.db)
        .await?
    {
      return Ok(rule);
    }

    service::Entity::find()
      .filter(service::Column::PaperId.eq(paper))
      .filter(service::Column::DeadlineId.eq(deadline))
      .filter(service::Column::LevelId.is_null())
      .one(self.db)
      .await?
      .ok_or(Error::ServiceUnavailable)
  }

  /// Per-page surcharge for a writer type on a resolved rule. The caller
  /// must not fall back silently when the pair is not configured.
  pub async fn surcharge(
    &self,
    service_id: Uuid,
    writer_type: Uuid,
  ) -> Result<writer_type_service::Model> {
    writer_type_service::Entity::find()
      .filter(writer_type_service::Column::ServiceId.eq(service_id))
      .filter(writer_type_service::Column::WriterTypeId.eq(writer_type))
      .one(self.db)
      .await?
      .ok_or(Error::WriterTypeUnavailable)
  }

  /// Writer types sellable for a rule, with their surcharges, in display
  /// order.
  pub async fn writer_types_for(
    &self,
    service_id: Uuid,
  ) -> Result<Vec<(writer_type::Model, Decimal)>> {
    let rows = writer_type_service::Entity::find()
      .filter(writer_type_service::Column::ServiceId.eq(service_id))
      .find_also_related(writer_type::Entity)
      .all(self.db)
      .await?;

    let mut out: Vec<_> = rows
      .into_iter()
      .filter_map(|(price, writer)| writer.map(|w| (w, price.amount)))
      .collect();
    out.sort_by(|(a, _), (b, _)| {
      a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name))
    });

    Ok(out)
  }

  /// Replace every pricing rule of a paper with a new set, atomically.
  /// On any failure the previous rule set is left intact.
  pub async fn replace_prices(
    &self,
    paper_id: Uuid,
    prices: &[PriceEntry],
  ) -> Result<()> {
    if prices.is_empty() {
      return Err(Error::InvalidArgs("Prices must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for price in prices {
      if !seen.insert((price.deadline_id, price.level_id)) {
        return Err(Error::InvalidArgs(
          "Duplicate deadline/level pair in prices".into(),
        ));
      }
      if price.amount < Decimal::ZERO {
        return Err(Error::InvalidArgs("Amount must not be negative".into()));
      }
    }

    let txn = self.db.begin().await?;

    paper::Entity::find_by_id(paper_id)
      .one(&txn)
      .await?
      .ok_or_else(|| Error::InvalidArgs("Unknown paper".into()))?;

    service::Entity::delete_many()
      .filter(service::Column::PaperId.eq(paper_id))
      .exec(&txn)
      .await?;

    let now = Utc::now().naive_utc();
    for price in prices {
      deadline::Entity::find_by_id(price.deadline_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::InvalidArgs("Unknown deadline".into()))?;

      if let Some(level_id) = price.level_id {
        level::Entity::find_by_id(level_id)
          .one(&txn)
          .await?
          .ok_or_else(|| Error::InvalidArgs("Unknown level".into()))?;
      }

      service::ActiveModel {
        id: Set(Uuid::new_v4()),
        paper_id: Set(paper_id),
        deadline_id: Set(price.deadline_id),
        level_id: Set(price.level_id),
        amount: Set(price.amount),
        created_at: Set(now),
      }
      .insert(&txn)
      .await?;
    }

    txn.commit().await?;

    info!("replaced {} pricing rules for paper {paper_id}", prices.len());
    Ok(())
  }

  /// Remove every pricing rule of a paper. Returns the number removed.
  pub async fn delete_prices(&self, paper_id: Uuid) -> Result<u64> {
    paper::Entity::find_by_id(paper_id)
      .one(self.db)
      .await?
      .ok_or_else(|| Error::InvalidArgs("Unknown paper".into()))?;

    let res = service::Entity::delete_many()
      .filter(service::Column::PaperId.eq(paper_id))
      .exec(self.db)
      .await?;

    Ok(res.rows_affected)
  }

  /// Add a writer-type surcharge to a rule.
  #[allow(dead_code)]
  pub async fn set_surcharge(
    &self,
    service_id: Uuid,
    writer_type: Uuid,
    amount: Decimal,
  ) -> Result<writer_type_service::Model> {
    if amount < Decimal::ZERO {
      return Err(Error::InvalidArgs("Amount must not be negative".into()));
    }

    let row = writer_type_service::ActiveModel {
      id: Set(Uuid::new_v4()),
      writer_type_id: Set(writer_type),
      service_id: Set(service_id),
      amount: Set(amount),
      created_at: Set(Utc::now().naive_utc()),
    };

    Ok(row.insert(self.db).await?)
  }

  #[allow(dead_code)]
  pub async fn rules_for(&self, paper_id: Uuid) -> Result<Vec<service::Model>> {
    let rules = service::Entity::find()
      .filter(service::Column::PaperId.eq(paper_id))
      .all(self.db)
      .await?;
    Ok(rules)
  }
}
