//! Academic calendar configuration.
//!
//! # Responsibility
//! - Resolve the current year/semester pair from the flagged
//!   `FileSemesters` reference row.
//! - Provide an immutable, injectable value object for lookup defaulting.
//!
//! # Invariants
//! - Exactly one `SystemCurrentFlag = 1` row must exist at resolution time.
//! - A resolved term never changes for the lifetime of the value.

use crate::db::DbError;
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current academic year/semester pair.
///
/// Resolved once at process start (or constructed directly in tests) and
/// passed to factories explicitly; there is no process-global copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicTerm {
    /// Academic year as stored in `FileSemesters.FileYear`.
    pub file_year: i32,
    /// Semester number as stored in `FileSemesters.FileSemester`.
    pub file_semester: i32,
}

/// Failure while resolving the current academic term.
#[derive(Debug)]
pub enum ConfigError {
    Db(DbError),
    /// No `FileSemesters` row carries the current flag.
    NoCurrentTerm,
    /// Several rows carry the current flag; reference data is inconsistent.
    AmbiguousCurrentTerm { matches: usize },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NoCurrentTerm => {
                write!(f, "no FileSemesters row has SystemCurrentFlag = 1")
            }
            Self::AmbiguousCurrentTerm { matches } => write!(
                f,
                "{matches} FileSemesters rows have SystemCurrentFlag = 1, when 1 was expected"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for ConfigError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for ConfigError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl AcademicTerm {
    /// Builds a term directly. Intended for tests and fixed-term tooling.
    pub fn new(file_year: i32, file_semester: i32) -> Self {
        Self {
            file_year,
            file_semester,
        }
    }

    /// Resolves the current term from the `FileSemesters` current-flag row.
    ///
    /// # Errors
    /// - `NoCurrentTerm` when no row is flagged.
    /// - `AmbiguousCurrentTerm` when more than one row is flagged.
    pub fn load_current(conn: &Connection) -> Result<Self, ConfigError> {
        let mut stmt = conn.prepare(
            "SELECT FileYear, FileSemester
             FROM FileSemesters
             WHERE SystemCurrentFlag = 1;",
        )?;

        let mut rows = stmt.query([])?;
        let mut terms = Vec::new();
        while let Some(row) = rows.next()? {
            terms.push(Self {
                file_year: row.get(0)?,
                file_semester: row.get(1)?,
            });
        }

        match terms.len() {
            1 => {
                let term = terms.remove(0);
                info!(
                    "event=term_resolve module=config status=ok file_year={} file_semester={}",
                    term.file_year, term.file_semester
                );
                Ok(term)
            }
            0 => Err(ConfigError::NoCurrentTerm),
            matches => Err(ConfigError::AmbiguousCurrentTerm { matches }),
        }
    }
}
