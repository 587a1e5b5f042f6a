//! The developer record — the sole entity of the catalog.
//!
//! A record is created with no id; the store assigns one on first save and it
//! never changes afterwards. Mutation is always a full replace of every other
//! field.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a [`Developer`].
pub type DeveloperId = i64;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Visibility state of a record.
///
/// `Active → Deleted` is the only transition; there is no way back. A
/// `Deleted` record stays in the store and remains addressable by id and
/// email until it is hard-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
  Active,
  Deleted,
}

impl Status {
  pub fn is_active(self) -> bool { matches!(self, Self::Active) }

  /// The text stored in the `status` column and used on the wire.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Active => "ACTIVE",
      Self::Deleted => "DELETED",
    }
  }
}

// ─── Developer ───────────────────────────────────────────────────────────────

/// A developer record as stored and as exchanged at the API boundary.
///
/// Optional fields left out of an update payload are cleared, not merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
  /// `None` until the store assigns one.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:         Option<DeveloperId>,
  /// Unique across the store at creation time (exact string match).
  pub email:      String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name:  Option<String>,
  /// Free-form tag used by the speciality filter (e.g. `"Java"`).
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub speciality: Option<String>,
  pub status:     Status,
}

impl Developer {
  /// A not-yet-created record with only the required fields set.
  pub fn new(email: impl Into<String>, status: Status) -> Self {
    Self {
      id: None,
      email: email.into(),
      first_name: None,
      last_name: None,
      speciality: None,
      status,
    }
  }

  pub fn with_id(mut self, id: DeveloperId) -> Self {
    self.id = Some(id);
    self
  }

  pub fn with_name(
    mut self,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
  ) -> Self {
    self.first_name = Some(first_name.into());
    self.last_name = Some(last_name.into());
    self
  }

  pub fn with_speciality(mut self, speciality: impl Into<String>) -> Self {
    self.speciality = Some(speciality.into());
    self
  }

  /// True when this record counts for the active list filters.
  pub fn is_active(&self) -> bool { self.status.is_active() }
}
