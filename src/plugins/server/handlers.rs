use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
  entity::{CouponType, DeadlineType, coupon, level, paper},
  prelude::*,
  state::AppState,
  sv::{
    Calculator, Catalog, Coupons, Pricing, calculator::QuoteRequest,
    coupon::NewCoupon, pricing::PriceEntry,
  },
};

pub async fn health() -> StatusCode {
  StatusCode::OK
}

pub async fn papers(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<paper::Model>>> {
  Ok(Json(Catalog::new(&app.db).papers().await?))
}

pub async fn levels(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<level::Model>>> {
  Ok(Json(Catalog::new(&app.db).levels().await?))
}

#[derive(Serialize)]
pub struct DeadlineItem {
  id: Uuid,
  full_name: String,
  value: i16,
  deadline_type: DeadlineType,
  sort_order: i16,
}

pub async fn deadlines(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<DeadlineItem>>> {
  let items = Catalog::new(&app.db)
    .deadlines()
    .await?
    .into_iter()
    .map(|d| DeadlineItem {
      id: d.id,
      full_name: d.full_name(),
      value: d.value,
      deadline_type: d.deadline_type,
      sort_order: d.sort_order,
    })
    .collect();

  Ok(Json(items))
}

#[derive(Deserialize)]
pub struct CreateNamedReq {
  name: String,
  #[serde(default)]
  sort_order: i16,
}

pub async fn create_paper(
  State(app): State<Arc<AppState>>,
  Json(req): Json<CreateNamedReq>,
) -> Result<(StatusCode, Json<paper::Model>)> {
  let paper =
    Catalog::new(&app.db).create_paper(&req.name, req.sort_order).await?;
  Ok((StatusCode::CREATED, Json(paper)))
}

pub async fn create_level(
  State(app): State<Arc<AppState>>,
  Json(req): Json<CreateNamedReq>,
) -> Result<(StatusCode, Json<level::Model>)> {
  let level =
    Catalog::new(&app.db).create_level(&req.name, req.sort_order).await?;
  Ok((StatusCode::CREATED, Json(level)))
}

#[derive(Deserialize)]
pub struct CreateDeadlineReq {
  value: i16,
  deadline_type: DeadlineType,
  #[serde(default)]
  sort_order: i16,
}

pub async fn create_deadline(
  State(app): State<Arc<AppState>>,
  Json(req): Json<CreateDeadlineReq>,
) -> Result<(StatusCode, Json<DeadlineItem>)> {
  let d = Catalog::new(&app.db)
    .create_deadline(req.value, req.deadline_type, req.sort_order)
    .await?;

  Ok((StatusCode::CREATED, Json(DeadlineItem {
    id: d.id,
    full_name: d.full_name(),
    value: d.value,
    deadline_type: d.deadline_type,
    sort_order: d.sort_order,
  })))
}

#[derive(Deserialize)]
pub struct CreateCouponReq {
  #[serde(default)]
  code: Option<String>,
  #[serde(default)]
  coupon_type: CouponType,
  percent_off: i16,
  #[serde(default)]
  minimum: Option<Decimal>,
  start_date: DateTime,
  end_date: DateTime,
}

pub async fn create_coupon(
  State(app): State<Arc<AppState>>,
  Json(req): Json<CreateCouponReq>,
) -> Result<(StatusCode, Json<coupon::Model>)> {
  let coupon = Coupons::new(&app.db)
    .create(NewCoupon {
      code: req.code,
      coupon_type: req.coupon_type,
      percent_off: req.percent_off,
      minimum: req.minimum,
      start_date: req.start_date,
      end_date: req.end_date,
    })
    .await?;

  Ok((StatusCode::CREATED, Json(coupon)))
}

#[derive(Deserialize)]
pub struct CalculatorReq {
  #[serde(flatten)]
  quote: QuoteRequest,
  /// Stand-in for the authentication layer: the storefront passes the
  /// signed-in customer here, anonymous visitors omit it.
  #[serde(default)]
  customer: Option<Uuid>,
}

#[derive(Serialize)]
pub struct QuoteResponse {
  subtotal: String,
  total: String,
  coupon_code: Option<String>,
}

pub async fn calculator(
  State(app): State<Arc<AppState>>,
  Json(req): Json<CalculatorReq>,
) -> Result<Json<QuoteResponse>> {
  let quote = Calculator::new(&app.db).quote(&req.quote, req.customer).await?;

  Ok(Json(QuoteResponse {
    subtotal: format!("{:.2}", quote.subtotal),
    total: format!("{:.2}", quote.total),
    coupon_code: quote.coupon_code,
  }))
}

#[derive(Deserialize)]
pub struct WriterTypesReq {
  paper: Uuid,
  deadline: Uuid,
  #[serde(default)]
  level: Option<Uuid>,
}

#[derive(Serialize)]
pub struct WriterTypeItem {
  id: Uuid,
  name: String,
  description: Option<String>,
  amount: String,
}

pub async fn writer_types(
  State(app): State<Arc<AppState>>,
  Json(req): Json<WriterTypesReq>,
) -> Result<Json<Vec<WriterTypeItem>>> {
  let pricing = Pricing::new(&app.db);

  let rule = match pricing.resolve(req.paper, req.deadline, req.level).await {
    Ok(rule) => rule,
    // an unsold combination has no writer types, not an error here
    Err(Error::ServiceUnavailable) => return Ok(Json(Vec::new())),
    Err(err) => return Err(err),
  };

  let items = pricing
    .writer_types_for(rule.id)
    .await?
    .into_iter()
    .map(|(writer, amount)| WriterTypeItem {
      id: writer.id,
      name: writer.name,
      description: writer.description,
      amount: format!("{amount:.2}"),
    })
    .collect();

  Ok(Json(items))
}

#[derive(Deserialize)]
pub struct CreatePricesReq {
  paper_id: Uuid,
  prices: Vec<PriceEntry>,
}

pub async fn create_prices(
  State(app): State<Arc<AppState>>,
  Json(req): Json<CreatePricesReq>,
) -> Result<StatusCode> {
  Pricing::new(&app.db).replace_prices(req.paper_id, &req.prices).await?;
  Ok(StatusCode::CREATED)
}

#[derive(Deserialize)]
pub struct DeletePricesReq {
  paper_id: Uuid,
}

#[derive(Serialize)]
pub struct DeletePricesResp {
  deleted: u64,
}

pub async fn delete_prices(
  State(app): State<Arc<AppState>>,
  Json(req): Json<DeletePricesReq>,
) -> Result<Json<DeletePricesResp>> {
  let deleted = Pricing::new(&app.db).delete_prices(req.paper_id).await?;
  Ok(Json(DeletePricesResp { deleted }))
}
