//! Subject class directory: lookup contracts and SQLite implementation.
//!
//! # Responsibility
//! - Resolve a class identity by surrogate sequence or composite natural
//!   key with exactly-one-match semantics.
//! - Keep the equality-filter SQL inside the persistence boundary.
//!
//! # Invariants
//! - Zero matches and multiple matches are both errors; a multiple match is
//!   a data-integrity defect in the store and is never silently resolved.
//! - Lookup errors carry the original filter values for diagnosis.
//! - Read-only: no lookup path writes.

use crate::db::DbError;
use crate::model::subject_class::{SubjectClass, SubjectClassKey};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SUBJECT_CLASS_SELECT_SQL: &str = "SELECT
    SubjectClassesSeq,
    ClassCode,
    FileType,
    FileYear,
    FileSemester,
    ClassCampus,
    Description
FROM SubjectClasses";

pub type LookupResult<T> = Result<T, LookupError>;

/// Lookup failure against the external store.
///
/// `NotFound` and `Ambiguous` are the semantic outcomes of the
/// exactly-one-match contract; `Db` passes transport failures through with
/// their source preserved.
#[derive(Debug)]
pub enum LookupError {
    /// No row matched the given equality filters.
    NotFound { filters: String },
    /// More than one row matched; the store's data integrity is broken.
    Ambiguous { matches: usize, filters: String },
    Db(DbError),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { filters } => {
                write!(f, "lookup returned 0 results, when 1 was expected: {filters}")
            }
            Self::Ambiguous { matches, filters } => write!(
                f,
                "lookup returned {matches} results, when 1 was expected: {filters}"
            ),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for LookupError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for LookupError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Directory interface for subject class resolution.
pub trait SubjectClassRepository {
    /// Resolves a class by surrogate sequence.
    fn find_by_seq(&self, seq: i64) -> LookupResult<SubjectClass>;
    /// Resolves a class by composite natural key.
    fn find_by_key(&self, key: &SubjectClassKey) -> LookupResult<SubjectClass>;
}

/// SQLite-backed subject class directory.
pub struct SqliteSubjectClassRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSubjectClassRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn find_matching(&self, where_clause: &str, bind_values: Vec<Value>) -> LookupResult<Vec<SubjectClass>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUBJECT_CLASS_SELECT_SQL} WHERE {where_clause};"))?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut matches = Vec::new();
        while let Some(row) = rows.next()? {
            matches.push(parse_subject_class_row(row)?);
        }
        Ok(matches)
    }
}

impl SubjectClassRepository for SqliteSubjectClassRepository<'_> {
    fn find_by_seq(&self, seq: i64) -> LookupResult<SubjectClass> {
        let matches = self.find_matching("SubjectClassesSeq = ?", vec![Value::Integer(seq)])?;
        exactly_one(matches, || format!("SubjectClassesSeq={seq}"))
    }

    fn find_by_key(&self, key: &SubjectClassKey) -> LookupResult<SubjectClass> {
        let matches = self.find_matching(
            "ClassCode = ?
               AND FileType = ?
               AND FileYear = ?
               AND FileSemester = ?
               AND ClassCampus = ?",
            vec![
                Value::Text(key.class_code.clone()),
                Value::Text(key.file_type.clone()),
                Value::Integer(i64::from(key.file_year)),
                Value::Integer(i64::from(key.file_semester)),
                Value::Text(key.class_campus.clone()),
            ],
        )?;
        exactly_one(matches, || key.to_string())
    }
}

fn exactly_one(
    mut matches: Vec<SubjectClass>,
    filters: impl FnOnce() -> String,
) -> LookupResult<SubjectClass> {
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(LookupError::NotFound { filters: filters() }),
        count => Err(LookupError::Ambiguous {
            matches: count,
            filters: filters(),
        }),
    }
}

fn parse_subject_class_row(row: &Row<'_>) -> LookupResult<SubjectClass> {
    Ok(SubjectClass {
        subject_classes_seq: row.get("SubjectClassesSeq")?,
        class_code: row.get("ClassCode")?,
        file_type: row.get("FileType")?,
        file_year: row.get("FileYear")?,
        file_semester: row.get("FileSemester")?,
        class_campus: row.get("ClassCampus")?,
        description: row.get("Description")?,
    })
}
