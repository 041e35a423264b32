use serde::Deserialize;

use crate::{
  entity::{deadline, level, paper, writer_type},
  prelude::*,
  sv::{Coupons, Orders, Pricing},
};

pub const MAX_PAGES: i32 = 1000;

pub struct Calculator<'a> {
  db: &'a DatabaseConnection,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuoteRequest {
  pub paper: Uuid,
  pub deadline: Uuid,
  pub pages: i32,
  #[serde(default)]
  pub level: Option<Uuid>,
  #[serde(default)]
  pub writer_type: Option<Uuid>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
  pub subtotal: Decimal,
  pub total: Decimal,
  pub coupon_code: Option<String>,
}

impl<'a> Calculator<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Price a paper request end to end: resolve the pricing rule, add the
  /// writer-type surcharge, and apply the best currently-valid coupon.
  ///
  /// `customer` is the authenticated customer, when there is one; an
  /// anonymous caller has no attributable order history and is treated
  /// as first-time-eligible.
  pub async fn quote(
    &self,
    req: &QuoteRequest,
    customer: Option<Uuid>,
  ) -> Result<Quote> {
    if !(1..=MAX_PAGES).contains(&req.pages) {
      return Err(Error::InvalidArgs(format!(
        "pages must be within 1..={MAX_PAGES}"
      )));
    }

    self.check_references(req).await?;

    let pricing = Pricing::new(self.db);
    let rule = pricing.resolve(req.paper, req.deadline, req.level).await?;

    let mut per_page = rule.amount;
    if let Some(writer_type) = req.writer_type {
      per_page += pricing.surcharge(rule.id, writer_type).await?.amount;
    }

    let subtotal = round_money(per_page * Decimal::from(req.pages));

    let is_first_time = match customer {
      Some(id) => Orders::new(self.db).is_first_time(id).await?,
      None => true,
    };

    let now = Utc::now().naive_utc();
    let coupons = Coupons::new(self.db);

    let (total, coupon_code) =
      match coupons.best_match(subtotal, is_first_time, now).await? {
        Some(coupon) => {
          let discount = coupons.discount(&coupon, subtotal);
          debug!("applying coupon {} to subtotal {subtotal}", coupon.code);
          (round_money(subtotal - discount), Some(coupon.code))
        }
        None => (subtotal, None),
      };

    Ok(Quote { subtotal, total, coupon_code })
  }

  /// Every referenced id must exist before any pricing lookup happens.
  async fn check_references(&self, req: &QuoteRequest) -> Result<()> {
    paper::Entity::find_by_id(req.paper)
      .one(self.db)
      .await?
      .ok_or_else(|| Error::InvalidArgs("Unknown paper".into()))?;

    deadline::Entity::find_by_id(req.deadline)
      .one(self.db)
      .await?
      .ok_or_else(|| Error::InvalidArgs("Unknown deadline".into()))?;

    if let Some(id) = req.level {
      level::Entity::find_by_id(id)
        .one(self.db)
        .await?
        .ok_or_else(|| Error::InvalidArgs("Unknown level".into()))?;
    }

    if let Some(id) = req.writer_type {
      writer_type::Entity::find_by_id(id)
        .one(self.db)
        .await?
        .ok_or_else(|| Error::InvalidArgs("Unknown writer type".into()))?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    entity::{CouponType, DeadlineType},
    sv::{
      Catalog, Customers,
      coupon::NewCoupon,
      pricing::PriceEntry,
      test_utils::test_db,
    },
  };

  fn money(s: &str) -> Decimal {
    s.parse().unwrap()
  }

  struct Store {
    paper: Uuid,
    deadline: Uuid,
    level: Uuid,
  }

  /// Essay at 15.00/page for any level, 12.00/page for the specific
  /// level.
  async fn store(db: &DatabaseConnection) -> Store {
    let catalog = Catalog::new(db);
    let paper = catalog.create_paper("Essay", 0).await.unwrap();
    let deadline =
      catalog.create_deadline(3, DeadlineType::Day, 0).await.unwrap();
    let level = catalog.create_level("PhD", 0).await.unwrap();

    Pricing::new(db)
      .replace_prices(paper.id, &[
        PriceEntry {
          deadline_id: deadline.id,
          level_id: None,
          amount: money("15.00"),
        },
        PriceEntry {
          deadline_id: deadline.id,
          level_id: Some(level.id),
          amount: money("12.00"),
        },
      ])
      .await
      .unwrap();

    Store { paper: paper.id, deadline: deadline.id, level: level.id }
  }

  fn req(store: &Store, pages: i32) -> QuoteRequest {
    QuoteRequest {
      paper: store.paper,
      deadline: store.deadline,
      pages,
      level: None,
      writer_type: None,
    }
  }

  #[tokio::test]
  async fn test_subtotal_is_amount_times_pages() {
    let db = test_db::setup().await;
    let store = store(&db).await;

    let quote =
      Calculator::new(&db).quote(&req(&store, 3), None).await.unwrap();

    assert_eq!(quote.subtotal, money("45.00"));
    assert_eq!(quote.total, money("45.00"));
    assert_eq!(quote.coupon_code, None);
  }

  #[tokio::test]
  async fn test_level_rule_prices_differently() {
    let db = test_db::setup().await;
    let store = store(&db).await;

    let mut request = req(&store, 3);
    request.level = Some(store.level);

    let quote = Calculator::new(&db).quote(&request, None).await.unwrap();
    assert_eq!(quote.subtotal, money("36.00"));
  }

  #[tokio::test]
  async fn test_pages_bounds() {
    let db = test_db::setup().await;
    let store = store(&db).await;
    let sv = Calculator::new(&db);

    for pages in [0, 1001] {
      assert!(matches!(
        sv.quote(&req(&store, pages), None).await,
        Err(Error::InvalidArgs(_))
      ));
    }

    for pages in [1, 1000] {
      sv.quote(&req(&store, pages), None).await.unwrap();
    }
  }

  #[tokio::test]
  async fn test_unknown_references_fail_validation() {
    let db = test_db::setup().await;
    let store = store(&db).await;
    let sv = Calculator::new(&db);

    let mut request = req(&store, 3);
    request.paper = Uuid::new_v4();
    assert!(matches!(
      sv.quote(&request, None).await,
      Err(Error::InvalidArgs(_))
    ));

    let mut request = req(&store, 3);
    request.writer_type = Some(Uuid::new_v4());
    assert!(matches!(
      sv.quote(&request, None).await,
      Err(Error::InvalidArgs(_))
    ));
  }

  #[tokio::test]
  async fn test_writer_type_surcharge_per_page() {
    let db = test_db::setup().await;
    let store = store(&db).await;
    let pricing = Pricing::new(&db);

    let premium = Catalog::new(&db)
      .create_writer_type("Premium", Some("Top 10 writers"), 0)
      .await
      .unwrap();
    let rule = pricing.resolve(store.paper, store.deadline, None).await.unwrap();
    pricing.set_surcharge(rule.id, premium.id, money("2.50")).await.unwrap();

    let mut request = req(&store, 3);
    request.writer_type = Some(premium.id);

    let quote = Calculator::new(&db).quote(&request, None).await.unwrap();
    // (15.00 + 2.50) * 3
    assert_eq!(quote.subtotal, money("52.50"));
  }

  #[tokio::test]
  async fn test_writer_type_without_surcharge_is_rejected() {
    let db = test_db::setup().await;
    let store = store(&db).await;

    let premium =
      Catalog::new(&db).create_writer_type("Premium", None, 0).await.unwrap();

    let mut request = req(&store, 3);
    request.writer_type = Some(premium.id);

    assert!(matches!(
      Calculator::new(&db).quote(&request, None).await,
      Err(Error::WriterTypeUnavailable)
    ));
  }

  async fn first_timer_coupon(db: &DatabaseConnection) {
    let now = Utc::now().naive_utc();
    Coupons::new(db)
      .create(NewCoupon {
        code: Some("WELCOME".into()),
        coupon_type: CouponType::FirstTimer,
        percent_off: 10,
        minimum: None,
        start_date: now - TimeDelta::days(1),
        end_date: now + TimeDelta::days(1),
      })
      .await
      .unwrap();
  }

  async fn regular_coupon(db: &DatabaseConnection, minimum: &str) {
    let now = Utc::now().naive_utc();
    Coupons::new(db)
      .create(NewCoupon {
        code: Some("LOYAL".into()),
        coupon_type: CouponType::Regular,
        percent_off: 10,
        minimum: Some(money(minimum)),
        start_date: now - TimeDelta::days(1),
        end_date: now + TimeDelta::days(1),
      })
      .await
      .unwrap();
  }

  #[tokio::test]
  async fn test_anonymous_caller_gets_first_timer_coupon() {
    let db = test_db::setup().await;
    let store = store(&db).await;
    first_timer_coupon(&db).await;
    regular_coupon(&db, "10.00").await;

    let quote =
      Calculator::new(&db).quote(&req(&store, 3), None).await.unwrap();

    assert_eq!(quote.subtotal, money("45.00"));
    assert_eq!(quote.total, money("40.50"));
    assert_eq!(quote.coupon_code.as_deref(), Some("WELCOME"));
  }

  #[tokio::test]
  async fn test_regular_coupon_applies_after_first_paid_order() {
    let db = test_db::setup().await;
    let store = store(&db).await;
    first_timer_coupon(&db).await;
    regular_coupon(&db, "45.00").await;

    let customer =
      Customers::new(&db).get_or_create("jo@example.com").await.unwrap();
    let sv = Calculator::new(&db);

    // no order history yet: first-timer tier
    let quote = sv.quote(&req(&store, 3), Some(customer.id)).await.unwrap();
    assert_eq!(quote.coupon_code.as_deref(), Some("WELCOME"));

    let orders = Orders::new(&db);
    let order = orders.create(customer.id, quote.total).await.unwrap();
    orders.mark_paid(order.id).await.unwrap();

    // history flips the customer into the regular tier
    let quote = sv.quote(&req(&store, 3), Some(customer.id)).await.unwrap();
    assert_eq!(quote.coupon_code.as_deref(), Some("LOYAL"));
    assert_eq!(quote.total, money("40.50"));
  }

  #[test]
  fn test_quote_request_optionals_default_to_none() {
    let req: QuoteRequest = json::from_value(json::json!({
      "paper": Uuid::new_v4(),
      "deadline": Uuid::new_v4(),
      "pages": 3,
    }))
    .unwrap();

    assert!(req.level.is_none());
    assert!(req.writer_type.is_none());
  }

  #[tokio::test]
  async fn test_quote_is_idempotent() {
    let db = test_db::setup().await;
    let store = store(&db).await;
    first_timer_coupon(&db).await;

    let sv = Calculator::new(&db);
    let first = sv.quote(&req(&store, 7), None).await.unwrap();
    let second = sv.quote(&req(&store, 7), None).await.unwrap();

    assert_eq!(first, second);
  }
}
