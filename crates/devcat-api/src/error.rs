//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is rendered as `{"status": <code>, "message": "<text>"}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use devcat_core::{ServiceError, StoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  NotFound(String),

  /// The request could not be extracted (bad path, query, or body).
  #[error("{message}")]
  Rejected { status: StatusCode, message: String },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn status_code(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Rejected { status, .. } => *status,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl<E: StoreError> From<ServiceError<E>> for ApiError {
  fn from(e: ServiceError<E>) -> Self {
    match e {
      ServiceError::DuplicateEmail(_) | ServiceError::MissingId => {
        ApiError::BadRequest(e.to_string())
      }
      ServiceError::NotFound(_) => ApiError::NotFound(e.to_string()),
      ServiceError::Store(inner) => ApiError::Store(Box::new(inner)),
    }
  }
}

/// Wire shape of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
  pub status:  u16,
  pub message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status_code();
    let message = match &self {
      ApiError::BadRequest(m)
      | ApiError::NotFound(m)
      | ApiError::Rejected { message: m, .. } => m.clone(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        e.to_string()
      }
    };
    let body = ErrorBody { status: status.as_u16(), message };
    (status, Json(body)).into_response()
  }
}
