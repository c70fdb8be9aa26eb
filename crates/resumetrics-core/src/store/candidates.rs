//! Candidates persisted in a single SQLite file.

use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension as _};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::candidate::{Candidate, ParsedResume, UNKNOWN_NAME};
use crate::models::config::StoreConfig;

use super::schema::{SCHEMA, TIMESTAMP_FORMAT};
use super::Result;

const CANDIDATE_COLUMNS: &str =
    "id, name, email, phone, skills, education, experience, timestamp";

/// Candidate store owning one SQLite connection.
///
/// The connection is released by [`CandidateStore::close`] or when the store
/// is dropped, whichever comes first.
pub struct CandidateStore {
    conn: Connection,
}

impl CandidateStore {
    /// Open (or create) a store at `path` with foreign keys enforced.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::init(Connection::open(path)?, true)
    }

    /// Open the store described by `config`.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::init(
            Connection::open(&config.database_path)?,
            config.enforce_foreign_keys,
        )
    }

    /// Open an in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?, true)
    }

    /// Configure the connection and create the schema. On failure the
    /// connection is dropped before the error is returned.
    fn init(conn: Connection, enforce_foreign_keys: bool) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", enforce_foreign_keys)?;
        conn.execute_batch(SCHEMA)?;
        debug!("Candidate store ready (foreign_keys={})", enforce_foreign_keys);
        Ok(Self { conn })
    }

    /// Insert a parsed resume as a new candidate and return its id.
    ///
    /// A candidate whose email is already stored is rejected with
    /// [`StoreError::Duplicate`]; the existing row is left untouched.
    pub fn save(&self, resume: &ParsedResume) -> Result<i64> {
        let inserted = self.conn.execute(
            "INSERT INTO candidates (name, email, phone, skills, education, experience)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                resume.name,
                resume.email,
                resume.phone,
                resume.skills,
                resume.education,
                resume.experience,
            ],
        );

        match inserted {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                info!("Saved candidate {} ({})", id, resume.name);
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => {
                info!(
                    "Duplicate resume found for email: {}",
                    resume.email.as_deref().unwrap_or("<none>")
                );
                Err(StoreError::Duplicate {
                    email: resume.email.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch one candidate by id.
    pub fn get(&self, id: i64) -> Result<Option<Candidate>> {
        let raw = self
            .conn
            .query_row(
                &format!("SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = ?1"),
                rusqlite::params![id],
                RawCandidate::from_row,
            )
            .optional()?;

        raw.map(RawCandidate::into_candidate).transpose()
    }

    /// All candidates in insertion order.
    pub fn list(&self) -> Result<Vec<Candidate>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY id"))?;
        let raws = stmt
            .query_map([], RawCandidate::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        raws.into_iter().map(RawCandidate::into_candidate).collect()
    }

    /// Number of stored candidates.
    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM candidates", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// The raw skills column of every candidate, in insertion order.
    pub fn skill_lists(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT COALESCE(skills, '') FROM candidates ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
    }

    /// Years of experience of every candidate, in insertion order.
    pub fn experience_values(&self) -> Result<Vec<u32>> {
        let mut stmt = self
            .conn
            .prepare("SELECT COALESCE(experience, 0) FROM candidates ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<u32>>>()?;
        Ok(rows)
    }

    /// Release the connection, reporting any error from closing it.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Database(e))?;
        debug!("Candidate store closed");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Row as stored; decoded by [`RawCandidate::into_candidate`].
struct RawCandidate {
    id: i64,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    skills: Option<String>,
    education: Option<String>,
    experience: Option<u32>,
    timestamp: String,
}

impl RawCandidate {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            skills: row.get(4)?,
            education: row.get(5)?,
            experience: row.get(6)?,
            timestamp: row.get(7)?,
        })
    }

    fn into_candidate(self) -> Result<Candidate> {
        let timestamp = NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| StoreError::DateParse(format!("{}: {}", self.timestamp, e)))?;

        Ok(Candidate {
            id: self.id,
            resume: ParsedResume {
                name: self.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                email: self.email,
                phone: self.phone,
                skills: self.skills.unwrap_or_default(),
                education: self.education.unwrap_or_default(),
                experience: self.experience.unwrap_or(0),
            },
            timestamp,
        })
    }
}
