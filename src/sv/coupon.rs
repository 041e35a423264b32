use std::cmp::Ordering;

use rand::Rng;

use crate::{
  entity::{CouponType, coupon},
  prelude::*,
};

const CODE_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CODE_LEN: usize = 8;

pub struct Coupons<'a> {
  db: &'a DatabaseConnection,
}

#[derive(Clone, Debug)]
pub struct NewCoupon {
  /// Generated when not supplied.
  pub code: Option<String>,
  pub coupon_type: CouponType,
  pub percent_off: i16,
  pub minimum: Option<Decimal>,
  pub start_date: DateTime,
  pub end_date: DateTime,
}

impl<'a> Coupons<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, new: NewCoupon) -> Result<coupon::Model> {
    if !(1..=100).contains(&new.percent_off) {
      return Err(Error::InvalidArgs(
        "Percent off must be within 1..=100".into(),
      ));
    }

    if new.end_date < new.start_date {
      return Err(Error::InvalidArgs(
        "End date must not precede start date".into(),
      ));
    }

    if let Some(minimum) = new.minimum
      && minimum < Decimal::ZERO
    {
      return Err(Error::InvalidArgs("Minimum must not be negative".into()));
    }

    let code = match new.code {
      Some(code) => code,
      None => self.generate_code().await?,
    };

    let row = coupon::ActiveModel {
      id: Set(Uuid::new_v4()),
      code: Set(code),
      coupon_type: Set(new.coupon_type),
      percent_off: Set(new.percent_off),
      minimum: Set(new.minimum),
      start_date: Set(new.start_date),
      end_date: Set(new.end_date),
      created_at: Set(Utc::now().naive_utc()),
    };

    Ok(row.insert(self.db).await?)
  }

  /// Random 8-char code over `[0-9A-Z]`, re-rolled on collision.
  async fn generate_code(&self) -> Result<String> {
    loop {
      let code: String = {
        let mut rng = rand::thread_rng();
        (0..CODE_LEN)
          .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
          .collect()
      };

      let taken = coupon::Entity::find()
        .filter(coupon::Column::Code.eq(&code))
        .one(self.db)
        .await?
        .is_some();

      if !taken {
        return Ok(code);
      }
    }
  }

  #[allow(dead_code)]
  pub async fn by_code(&self, code: &str) -> Result<Option<coupon::Model>> {
    let coupon = coupon::Entity::find()
      .filter(coupon::Column::Code.eq(code))
      .one(self.db)
      .await?;
    Ok(coupon)
  }

  /// Coupons whose validity window contains `now` (inclusive).
  pub async fn active(&self, now: DateTime) -> Result<Vec<coupon::Model>> {
    let coupons = coupon::Entity::find()
      .filter(coupon::Column::StartDate.lte(now))
      .filter(coupon::Column::EndDate.gte(now))
      .all(self.db)
      .await?;
    Ok(coupons)
  }

  /// Pick the coupon giving the customer the largest discount.
  ///
  /// First-time customers (anonymous included) draw exclusively from
  /// first-timer coupons, ranked by `percent_off`. Returning customers
  /// draw from regular coupons whose minimum the subtotal clears, the
  /// highest qualifying minimum winning. There is no cross-tier
  /// fallback.
  pub async fn best_match(
    &self,
    subtotal: Decimal,
    is_first_time: bool,
    now: DateTime,
  ) -> Result<Option<coupon::Model>> {
    let mut pool = self.active(now).await?;

    if is_first_time {
      pool.retain(|c| c.coupon_type == CouponType::FirstTimer);
      pool.sort_by(rank);
    } else {
      pool.retain(|c| {
        c.coupon_type == CouponType::Regular
          && c.minimum.is_none_or(|minimum| subtotal >= minimum)
      });
      pool.sort_by(|a, b| {
        let a_min = a.minimum.unwrap_or(Decimal::ZERO);
        let b_min = b.minimum.unwrap_or(Decimal::ZERO);
        b_min.cmp(&a_min).then_with(|| rank(a, b))
      });
    }

    Ok(pool.into_iter().next())
  }

  /// Discount a coupon grants on a subtotal, half-up to 2 decimals.
  pub fn discount(&self, coupon: &coupon::Model, subtotal: Decimal) -> Decimal {
    round_money(subtotal * Decimal::from(coupon.percent_off) / Decimal::ONE_HUNDRED)
  }
}

/// Deterministic tie-break shared by both tiers: largest discount first,
/// then the longest-running coupon, then the code.
fn rank(a: &coupon::Model, b: &coupon::Model) -> Ordering {
  b.percent_off
    .cmp(&a.percent_off)
    .then_with(|| a.start_date.cmp(&b.start_date))
    .then_with(|| a.code.cmp(&b.code))
}
