//! Extractor wrappers whose rejections render as [`ApiError`] bodies, plus
//! the lenient query-flag parser used by `DELETE`.

use axum::extract::{
  FromRequest, FromRequestParts,
  rejection::{JsonRejection, PathRejection, QueryRejection},
};
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::error::ApiError;

/// [`axum::Json`] with a structured rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// [`axum::extract::Path`] with a structured rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// [`axum::extract::Query`] with a structured rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self {
    ApiError::Rejected { status: r.status(), message: r.body_text() }
  }
}

impl From<PathRejection> for ApiError {
  fn from(r: PathRejection) -> Self {
    ApiError::Rejected { status: r.status(), message: r.body_text() }
  }
}

impl From<QueryRejection> for ApiError {
  fn from(r: QueryRejection) -> Self {
    ApiError::Rejected { status: r.status(), message: r.body_text() }
  }
}

// ─── Boolean-like flags ───────────────────────────────────────────────────────

/// Parse a query flag: `true`/`on`/`yes`/`1` and `false`/`off`/`no`/`0`, in
/// any case. An empty value means `false`.
pub fn parse_flag(raw: &str) -> Option<bool> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "true" | "on" | "yes" | "1" => Some(true),
    "false" | "off" | "no" | "0" | "" => Some(false),
    _ => None,
  }
}

/// `deserialize_with` adapter for [`parse_flag`].
pub fn boolean_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = String::deserialize(deserializer)?;
  parse_flag(&raw)
    .ok_or_else(|| D::Error::custom(format!("invalid boolean value {raw:?}")))
}

#[cfg(test)]
mod tests {
  use super::parse_flag;

  #[test]
  fn flag_spellings() {
    for raw in ["true", "TRUE", "on", "Yes", "1"] {
      assert_eq!(parse_flag(raw), Some(true), "{raw}");
    }
    for raw in ["false", "Off", "NO", "0", ""] {
      assert_eq!(parse_flag(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_flag("maybe"), None);
  }
}
