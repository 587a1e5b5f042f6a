//! [`SqliteStore`] — the SQLite implementation of [`DeveloperStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use devcat_core::{Developer, DeveloperId, DeveloperStore, Status};

use crate::{
  Error, Result,
  encode::{COLUMNS, RawDeveloper, encode_status},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A developer store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT` returning at most one row.
  async fn query_one(
    &self,
    sql: String,
    param: rusqlite::types::Value,
  ) -> Result<Option<Developer>> {
    let raw: Option<RawDeveloper> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![param], RawDeveloper::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawDeveloper::into_developer).transpose()
  }

  /// Insert a new row and return its assigned id.
  async fn insert_row(&self, developer: &Developer) -> Result<DeveloperId> {
    let email      = developer.email.clone();
    let first_name = developer.first_name.clone();
    let last_name  = developer.last_name.clone();
    let speciality = developer.speciality.clone();
    let status     = encode_status(developer.status);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO developers (email, first_name, last_name, speciality, status)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![email, first_name, last_name, speciality, status],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  /// Overwrite every column of row `id`. Returns `false` if no such row
  /// exists; a row removed since the caller's existence check stays removed.
  async fn update_row(&self, id: DeveloperId, developer: &Developer) -> Result<bool> {
    let email      = developer.email.clone();
    let first_name = developer.first_name.clone();
    let last_name  = developer.last_name.clone();
    let speciality = developer.speciality.clone();
    let status     = encode_status(developer.status);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE developers SET
             email      = ?2,
             first_name = ?3,
             last_name  = ?4,
             speciality = ?5,
             status     = ?6
           WHERE id = ?1",
          rusqlite::params![id, email, first_name, last_name, speciality, status],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }
}

// ─── DeveloperStore impl ─────────────────────────────────────────────────────

impl DeveloperStore for SqliteStore {
  type Error = Error;

  async fn find_by_id(&self, id: DeveloperId) -> Result<Option<Developer>> {
    self
      .query_one(
        format!("SELECT {COLUMNS} FROM developers WHERE id = ?1"),
        id.into(),
      )
      .await
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<Developer>> {
    // Lowest id wins if an update has introduced a duplicate.
    self
      .query_one(
        format!(
          "SELECT {COLUMNS} FROM developers WHERE email = ?1 ORDER BY id LIMIT 1"
        ),
        email.to_owned().into(),
      )
      .await
  }

  async fn upsert(&self, developer: Developer) -> Result<Developer> {
    let id = match developer.id {
      None => self.insert_row(&developer).await?,
      Some(id) => {
        if !self.update_row(id, &developer).await? {
          return Err(Error::MissingRow(id));
        }
        id
      }
    };

    tracing::trace!(id, "upserted developer row");

    Ok(Developer { id: Some(id), ..developer })
  }

  async fn exists_by_id(&self, id: DeveloperId) -> Result<bool> {
    let exists = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM developers WHERE id = ?1",
              rusqlite::params![id],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;
    Ok(exists)
  }

  async fn delete_by_id(&self, id: DeveloperId) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM developers WHERE id = ?1", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn find_all(&self) -> Result<Vec<Developer>> {
    let raws: Vec<RawDeveloper> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {COLUMNS} FROM developers ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawDeveloper::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDeveloper::into_developer).collect()
  }

  async fn find_active_by_speciality(
    &self,
    speciality: &str,
  ) -> Result<Vec<Developer>> {
    let speciality = speciality.to_owned();
    let active = encode_status(Status::Active);

    let raws: Vec<RawDeveloper> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM developers
           WHERE status = ?1 AND speciality = ?2
           ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![active, speciality], RawDeveloper::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDeveloper::into_developer).collect()
  }
}
