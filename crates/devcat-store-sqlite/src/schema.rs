//! SQL schema for the developer SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
///
/// `email` is indexed but deliberately not `UNIQUE`: uniqueness is checked
/// when a record is created, and an update may still set a taken email.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS developers (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT NOT NULL,
    first_name  TEXT,
    last_name   TEXT,
    speciality  TEXT,
    status      TEXT NOT NULL    -- 'ACTIVE' | 'DELETED'
);

CREATE INDEX IF NOT EXISTS developers_email_idx
    ON developers(email);
CREATE INDEX IF NOT EXISTS developers_status_speciality_idx
    ON developers(status, speciality);

PRAGMA user_version = 1;
";
