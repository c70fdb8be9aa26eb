//! SQL schema for the candidate store.
//!
//! Executed every time a store is opened; idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS`.

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS candidates (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT,
    email       TEXT UNIQUE,    -- NULLs are not subject to the constraint
    phone       TEXT,
    skills      TEXT,           -- ', ' separated keywords
    education   TEXT,           -- ' | ' separated sentences
    experience  INTEGER,        -- years
    timestamp   DATETIME DEFAULT CURRENT_TIMESTAMP
);

-- Declared relation; nothing reads or writes it yet.
CREATE TABLE IF NOT EXISTS job_matches (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    candidate_id  INTEGER,
    job_title     TEXT,
    match_score   REAL,
    FOREIGN KEY (candidate_id) REFERENCES candidates (id)
);

PRAGMA user_version = 1;
";

/// Format of `CURRENT_TIMESTAMP` values.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
