//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Status is stored as its wire spelling (`ACTIVE` / `DELETED`); every other
//! column maps one-to-one onto a [`Developer`] field.

use devcat_core::{Developer, DeveloperId, Status};

use crate::{Error, Result};

/// Column list shared by every `SELECT`, in [`RawDeveloper::from_row`] order.
pub const COLUMNS: &str = "id, email, first_name, last_name, speciality, status";

// ─── Status ──────────────────────────────────────────────────────────────────

pub fn encode_status(s: Status) -> &'static str { s.as_str() }

pub fn decode_status(s: &str) -> Result<Status> {
  match s {
    "ACTIVE" => Ok(Status::Active),
    "DELETED" => Ok(Status::Deleted),
    other => Err(Error::UnknownStatus(other.to_owned())),
  }
}

// ─── Row ─────────────────────────────────────────────────────────────────────

/// A `developers` row as read from SQLite, before status decoding.
pub struct RawDeveloper {
  pub id:         DeveloperId,
  pub email:      String,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub speciality: Option<String>,
  pub status:     String,
}

impl RawDeveloper {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      email:      row.get(1)?,
      first_name: row.get(2)?,
      last_name:  row.get(3)?,
      speciality: row.get(4)?,
      status:     row.get(5)?,
    })
  }

  pub fn into_developer(self) -> Result<Developer> {
    Ok(Developer {
      id:         Some(self.id),
      email:      self.email,
      first_name: self.first_name,
      last_name:  self.last_name,
      speciality: self.speciality,
      status:     decode_status(&self.status)?,
    })
  }
}
