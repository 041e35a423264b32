use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  Db(#[from] sea_orm::DbErr),
  #[error("{0}")]
  InvalidArgs(String),
  #[error("no pricing available for the requested combination")]
  ServiceUnavailable,
  #[error("writer type not available for this service")]
  WriterTypeUnavailable,
  #[error("customer not found")]
  CustomerNotFound,
  #[error("order not found")]
  OrderNotFound,
}

#[derive(Serialize)]
struct ErrorBody {
  error: String,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::Db(err) => {
        error!("database error: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
      }
      Error::InvalidArgs(_)
      | Error::ServiceUnavailable
      | Error::WriterTypeUnavailable
      | Error::CustomerNotFound
      | Error::OrderNotFound => StatusCode::BAD_REQUEST,
    };

    (status, Json(ErrorBody { error: self.to_string() })).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn client_errors_map_to_bad_request() {
    for err in [
      Error::InvalidArgs("bad pages".into()),
      Error::ServiceUnavailable,
      Error::WriterTypeUnavailable,
      Error::CustomerNotFound,
      Error::OrderNotFound,
    ] {
      assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
  }
}
