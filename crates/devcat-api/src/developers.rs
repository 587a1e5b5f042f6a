//! Handlers for `/api/v1/developers` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/api/v1/developers` | Body: [`Developer`]; 400 on duplicate email |
//! | `PUT`    | `/api/v1/developers` | Body: [`Developer`] with `id`; full replace |
//! | `GET`    | `/api/v1/developers` | Active records only |
//! | `GET`    | `/api/v1/developers/:id` | Any status; 404 if absent |
//! | `GET`    | `/api/v1/developers/email/:email` | Any status; 404 if absent |
//! | `GET`    | `/api/v1/developers/speciality/:speciality` | Active records only |
//! | `DELETE` | `/api/v1/developers/:id` | `?isHard=true` for permanent removal |
//!
//! Malformed paths, queries and bodies are rejected with the same
//! `{"status","message"}` body as domain errors.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use devcat_core::{Developer, DeveloperId, DeveloperService, DeveloperStore};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{ApiJson, ApiPath, ApiQuery, boolean_flag},
};

type Service<S> = State<Arc<DeveloperService<S>>>;

// ─── Writes ───────────────────────────────────────────────────────────────────

/// `POST /api/v1/developers`
pub async fn create<S>(
  State(service): Service<S>,
  ApiJson(body): ApiJson<Developer>,
) -> Result<Json<Developer>, ApiError>
where
  S: DeveloperStore + 'static,
{
  Ok(Json(service.create(body).await?))
}

/// `PUT /api/v1/developers`
pub async fn update<S>(
  State(service): Service<S>,
  ApiJson(body): ApiJson<Developer>,
) -> Result<Json<Developer>, ApiError>
where
  S: DeveloperStore + 'static,
{
  Ok(Json(service.update(body).await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
  /// Remove the record permanently instead of marking it deleted. Accepts
  /// the usual boolean spellings; empty or absent means soft delete.
  #[serde(default, rename = "isHard", deserialize_with = "boolean_flag")]
  pub is_hard: bool,
}

/// `DELETE /api/v1/developers/:id[?isHard=true]` — empty body on success.
pub async fn delete_one<S>(
  State(service): Service<S>,
  ApiPath(id): ApiPath<DeveloperId>,
  ApiQuery(params): ApiQuery<DeleteParams>,
) -> Result<StatusCode, ApiError>
where
  S: DeveloperStore + 'static,
{
  if params.is_hard {
    service.hard_delete(id).await?;
  } else {
    service.soft_delete(id).await?;
  }
  Ok(StatusCode::OK)
}

// ─── Reads ────────────────────────────────────────────────────────────────────

/// `GET /api/v1/developers/:id`
pub async fn get_one<S>(
  State(service): Service<S>,
  ApiPath(id): ApiPath<DeveloperId>,
) -> Result<Json<Developer>, ApiError>
where
  S: DeveloperStore + 'static,
{
  Ok(Json(service.get_by_id(id).await?))
}

/// `GET /api/v1/developers/email/:email`
pub async fn get_by_email<S>(
  State(service): Service<S>,
  ApiPath(email): ApiPath<String>,
) -> Result<Json<Developer>, ApiError>
where
  S: DeveloperStore + 'static,
{
  Ok(Json(service.get_by_email(&email).await?))
}

/// `GET /api/v1/developers`
pub async fn list_active<S>(
  State(service): Service<S>,
) -> Result<Json<Vec<Developer>>, ApiError>
where
  S: DeveloperStore + 'static,
{
  Ok(Json(service.list_active().await?))
}

/// `GET /api/v1/developers/speciality/:speciality`
pub async fn list_by_speciality<S>(
  State(service): Service<S>,
  ApiPath(speciality): ApiPath<String>,
) -> Result<Json<Vec<Developer>>, ApiError>
where
  S: DeveloperStore + 'static,
{
  Ok(Json(service.list_active_by_speciality(&speciality).await?))
}
