//! JSON REST API for the developer catalog.
//!
//! Exposes an axum [`Router`] backed by a [`DeveloperService`] over any
//! [`DeveloperStore`]. Auth, TLS, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = devcat_api::api_router(Arc::new(DeveloperService::new(store)));
//! ```

pub mod developers;
pub mod error;
pub mod extract;

use std::sync::Arc;

use axum::{Router, routing::get};
use devcat_core::{DeveloperService, DeveloperStore};

pub use error::ApiError;

/// Build the API router for `service`.
///
/// The returned `Router<()>` can be nested or layered by the caller
/// regardless of its own state type.
pub fn api_router<S>(service: Arc<DeveloperService<S>>) -> Router<()>
where
  S: DeveloperStore + 'static,
{
  Router::new()
    .route(
      "/api/v1/developers",
      get(developers::list_active::<S>)
        .post(developers::create::<S>)
        .put(developers::update::<S>),
    )
    .route(
      "/api/v1/developers/{id}",
      get(developers::get_one::<S>).delete(developers::delete_one::<S>),
    )
    .route(
      "/api/v1/developers/email/{email}",
      get(developers::get_by_email::<S>),
    )
    .route(
      "/api/v1/developers/speciality/{speciality}",
      get(developers::list_by_speciality::<S>),
    )
    .with_state(service)
}
