//! The `DeveloperStore` trait — the persistence capability the service needs.
//!
//! The trait is implemented by storage backends (e.g. `devcat-store-sqlite`).
//! The store performs no validation of its own; every business rule lives in
//! [`crate::service::DeveloperService`].

use std::future::Future;

use crate::developer::{Developer, DeveloperId};

// ─── Error capability ────────────────────────────────────────────────────────

/// Error type of a [`DeveloperStore`] backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` if the backend rejected a write because it would duplicate a
  /// uniquely-indexed value. The service reports this as a duplicate email.
  fn is_unique_violation(&self) -> bool;

  /// `true` if a write addressed to an existing id found no row, e.g. because
  /// a concurrent hard delete removed it first.
  fn is_missing_row(&self) -> bool { false }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a developer record store.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait DeveloperStore: Send + Sync {
  type Error: StoreError;

  /// Retrieve a record by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: DeveloperId,
  ) -> impl Future<Output = Result<Option<Developer>, Self::Error>> + Send + '_;

  /// Retrieve a record by exact email. Returns `None` if not found.
  fn find_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Developer>, Self::Error>> + Send + 'a;

  /// Write a record unconditionally and return it as stored.
  ///
  /// - `id == None`: insert and assign a fresh id.
  /// - `id == Some(n)`: overwrite every field of row `n`; fails with an
  ///   error reporting [`StoreError::is_missing_row`] if row `n` is gone.
  fn upsert(
    &self,
    developer: Developer,
  ) -> impl Future<Output = Result<Developer, Self::Error>> + Send + '_;

  fn exists_by_id(
    &self,
    id: DeveloperId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Physically remove a record. Removing an absent id is not an error.
  fn delete_by_id(
    &self,
    id: DeveloperId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Every record regardless of status, in the backend's natural scan order.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Developer>, Self::Error>> + Send + '_;

  /// Active records with exactly this speciality. Backends must evaluate the
  /// filter themselves rather than scanning.
  fn find_active_by_speciality<'a>(
    &'a self,
    speciality: &'a str,
  ) -> impl Future<Output = Result<Vec<Developer>, Self::Error>> + Send + 'a;
}
