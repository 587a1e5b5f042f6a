//! Error types for `devcat-core`.

use std::fmt;

use thiserror::Error;

use crate::developer::DeveloperId;

/// The key a failed lookup was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
  Id(DeveloperId),
  Email(String),
}

impl fmt::Display for Lookup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Id(id) => write!(f, "ID: {id}"),
      Self::Email(email) => write!(f, "email: {email}"),
    }
  }
}

/// A failure returned by [`crate::service::DeveloperService`].
///
/// `E` is the backend's error type; anything the store reports other than a
/// uniqueness rejection is passed through untouched as [`Self::Store`].
#[derive(Debug, Error)]
pub enum ServiceError<E> {
  #[error("Email {0} already in use")]
  DuplicateEmail(String),

  #[error("Developer with {0} not found")]
  NotFound(Lookup),

  #[error("Developer ID is required for update")]
  MissingId,

  #[error("store error: {0}")]
  Store(#[source] E),
}

impl<E> ServiceError<E> {
  pub fn not_found_id(id: DeveloperId) -> Self { Self::NotFound(Lookup::Id(id)) }

  pub fn not_found_email(email: impl Into<String>) -> Self {
    Self::NotFound(Lookup::Email(email.into()))
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }

  pub fn is_duplicate_email(&self) -> bool {
    matches!(self, Self::DuplicateEmail(_))
  }
}

pub type Result<T, E> = std::result::Result<T, ServiceError<E>>;
