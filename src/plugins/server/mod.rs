mod handlers;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use async_trait::async_trait;
use axum::{
  Router,
  routing::{get, post},
};
use tower::ServiceBuilder;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{prelude::*, state::AppState};

pub struct Plugin;

#[async_trait]
impl super::Plugin for Plugin {
  async fn start(&self, app: Arc<AppState>) -> anyhow::Result<()> {
    let port: u16 =
      std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    serve(app, addr).await
  }
}

async fn serve(app: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
  let governor_conf = Arc::new(
    GovernorConfigBuilder::default()
      .per_second(2)
      .burst_size(100)
      .finish()
      .context("Failed to build rate limiter config")?,
  );

  let governor_limiter = governor_conf.limiter().clone();

  tokio::spawn(async move {
    loop {
      tokio::time::sleep(std::time::Duration::from_secs(60)).await;
      governor_limiter.retain_recent();
    }
  });

  let router = Router::new()
    .route("/health", get(handlers::health))
    .route(
      "/api/papers",
      get(handlers::papers).post(handlers::create_paper),
    )
    .route(
      "/api/levels",
      get(handlers::levels).post(handlers::create_level),
    )
    .route(
      "/api/deadlines",
      get(handlers::deadlines).post(handlers::create_deadline),
    )
    .route("/api/coupons", post(handlers::create_coupon))
    .route("/api/calculator", post(handlers::calculator))
    .route("/api/writer-types", post(handlers::writer_types))
    .route("/api/prices/create-bulk", post(handlers::create_prices))
    .route("/api/prices/delete-bulk", post(handlers::delete_prices))
    .layer(
      ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(GovernorLayer::new(governor_conf))
        .layer(
          CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        ),
    )
    .with_state(app)
    .into_make_service_with_connect_info::<SocketAddr>();

  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .with_context(|| format!("Failed to bind {addr}"))?;

  info!("HTTP server listening on {addr}");

  tokio::spawn(async move {
    if let Err(err) = axum::serve(listener, router).await {
      tracing::error!("HTTP server stopped: {err}");
    }
  });

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sv::test_utils::test_db;

  #[tokio::test]
  async fn serve_fails_when_addr_is_taken() {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = occupied.local_addr().unwrap();

    let db = test_db::setup().await;
    let app = Arc::new(AppState { db });

    assert!(serve(app, addr).await.is_err());
  }
}
