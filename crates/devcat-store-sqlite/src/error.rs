//! Error type for `devcat-store-sqlite`.

use devcat_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A `status` column held text other than `ACTIVE` or `DELETED`.
  #[error("unknown developer status: {0:?}")]
  UnknownStatus(String),

  /// An update addressed a row that no longer exists.
  #[error("no developer row with id {0}")]
  MissingRow(devcat_core::DeveloperId),
}

impl StoreError for Error {
  fn is_unique_violation(&self) -> bool {
    match self {
      Error::Database(tokio_rusqlite::Error::Rusqlite(
        rusqlite::Error::SqliteFailure(e, _),
      )) => e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
      _ => false,
    }
  }

  fn is_missing_row(&self) -> bool { matches!(self, Error::MissingRow(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
