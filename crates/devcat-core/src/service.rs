//! [`DeveloperService`] — the lifecycle rules over a [`DeveloperStore`].
//!
//! The service is a stateless policy layer: it holds nothing between calls
//! and every check is a plain read against the store followed by a write.
//! Those check-then-act pairs are not atomic; a backend that enforces unique
//! emails itself is the final arbiter, and its rejection surfaces as
//! [`ServiceError::DuplicateEmail`]. Likewise a row that vanishes between
//! the check and the write is reported as [`ServiceError::NotFound`].

use std::sync::Arc;

use crate::{
  developer::{Developer, DeveloperId, Status},
  error::{Result, ServiceError},
  store::{DeveloperStore, StoreError},
};

/// Application service for developer records.
pub struct DeveloperService<S: DeveloperStore> {
  store: Arc<S>,
}

impl<S: DeveloperStore> Clone for DeveloperService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: DeveloperStore> DeveloperService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// The backing store.
  pub fn store(&self) -> &Arc<S> { &self.store }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Create a record, rejecting an email that is already taken.
  ///
  /// Any caller-supplied id is discarded; the store assigns a fresh one. The
  /// caller's `status` is kept as given, so a record may be created directly
  /// in the `Deleted` state.
  pub async fn create(
    &self,
    developer: Developer,
  ) -> Result<Developer, S::Error> {
    let existing = self
      .store
      .find_by_email(&developer.email)
      .await
      .map_err(ServiceError::Store)?;
    if existing.is_some() {
      tracing::debug!(email = %developer.email, "rejecting duplicate email");
      return Err(ServiceError::DuplicateEmail(developer.email));
    }

    let email = developer.email.clone();
    let created = self
      .store
      .upsert(Developer { id: None, ..developer })
      .await
      .map_err(|e| upsert_error(e, None, &email))?;

    tracing::info!(id = ?created.id, email = %created.email, "created developer");
    Ok(created)
  }

  /// Replace every mutable field of an existing record.
  ///
  /// Email uniqueness is not re-checked here: an update may set an email that
  /// another record already holds.
  pub async fn update(
    &self,
    developer: Developer,
  ) -> Result<Developer, S::Error> {
    let id = developer.id.ok_or(ServiceError::MissingId)?;

    let exists = self
      .store
      .exists_by_id(id)
      .await
      .map_err(ServiceError::Store)?;
    if !exists {
      return Err(ServiceError::not_found_id(id));
    }

    let email = developer.email.clone();
    let updated = self
      .store
      .upsert(developer)
      .await
      .map_err(|e| upsert_error(e, Some(id), &email))?;

    tracing::info!(id, "updated developer");
    Ok(updated)
  }

  /// Flip a record to [`Status::Deleted`], leaving it addressable.
  pub async fn soft_delete(&self, id: DeveloperId) -> Result<(), S::Error> {
    let mut developer = self.get_by_id(id).await?;
    developer.status = Status::Deleted;

    let email = developer.email.clone();
    self
      .store
      .upsert(developer)
      .await
      .map_err(|e| upsert_error(e, Some(id), &email))?;

    tracing::info!(id, "soft-deleted developer");
    Ok(())
  }

  /// Remove a record from the store permanently.
  pub async fn hard_delete(&self, id: DeveloperId) -> Result<(), S::Error> {
    let developer = self.get_by_id(id).await?;
    let id = developer.id.unwrap_or(id);

    self
      .store
      .delete_by_id(id)
      .await
      .map_err(ServiceError::Store)?;

    tracing::info!(id, "hard-deleted developer");
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Fetch a record by id, whatever its status.
  pub async fn get_by_id(&self, id: DeveloperId) -> Result<Developer, S::Error> {
    tracing::debug!(id, "looking up developer by id");
    self
      .store
      .find_by_id(id)
      .await
      .map_err(ServiceError::Store)?
      .ok_or_else(|| ServiceError::not_found_id(id))
  }

  /// Fetch a record by exact email, whatever its status.
  pub async fn get_by_email(&self, email: &str) -> Result<Developer, S::Error> {
    tracing::debug!(email, "looking up developer by email");
    self
      .store
      .find_by_email(email)
      .await
      .map_err(ServiceError::Store)?
      .ok_or_else(|| ServiceError::not_found_email(email))
  }

  /// All active records, in the store's scan order.
  ///
  /// Scans every record and filters here; cost grows with the total record
  /// count, deleted ones included.
  pub async fn list_active(&self) -> Result<Vec<Developer>, S::Error> {
    let mut developers =
      self.store.find_all().await.map_err(ServiceError::Store)?;
    developers.retain(Developer::is_active);
    Ok(developers)
  }

  /// Active records with exactly `speciality`, filtered by the store.
  pub async fn list_active_by_speciality(
    &self,
    speciality: &str,
  ) -> Result<Vec<Developer>, S::Error> {
    self
      .store
      .find_active_by_speciality(speciality)
      .await
      .map_err(ServiceError::Store)
  }
}

fn upsert_error<E: StoreError>(
  error: E,
  id: Option<DeveloperId>,
  email: &str,
) -> ServiceError<E> {
  if error.is_unique_violation() {
    ServiceError::DuplicateEmail(email.to_owned())
  } else if let (true, Some(id)) = (error.is_missing_row(), id) {
    ServiceError::not_found_id(id)
  } else {
    ServiceError::Store(error)
  }
}
