//! Subject class record and natural-key value object.
//!
//! # Responsibility
//! - Define the `SubjectClasses` read model.
//! - Carry the composite natural key with its vendor defaults.
//!
//! # Invariants
//! - A key identifies at most one class; duplicate matches are a defect in
//!   the underlying data, surfaced by the directory, never resolved here.

use crate::config::AcademicTerm;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Vendor default for `FileType` on academic classes.
pub const DEFAULT_FILE_TYPE: &str = "A";
/// Vendor default campus code.
pub const DEFAULT_CLASS_CAMPUS: &str = "S";

/// One taught class section, as stored in `SubjectClasses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectClass {
    /// Surrogate sequence assigned by the store.
    #[serde(rename = "SubjectClassesSeq")]
    pub subject_classes_seq: i64,
    #[serde(rename = "ClassCode")]
    pub class_code: String,
    #[serde(rename = "FileType")]
    pub file_type: String,
    #[serde(rename = "FileYear")]
    pub file_year: i32,
    #[serde(rename = "FileSemester")]
    pub file_semester: i32,
    #[serde(rename = "ClassCampus")]
    pub class_campus: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// Composite natural key for a subject class.
///
/// Business-meaningful alternative to the surrogate sequence: class code
/// plus file type/year/semester and campus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectClassKey {
    pub class_code: String,
    pub file_type: String,
    pub file_year: i32,
    pub file_semester: i32,
    pub class_campus: String,
}

impl SubjectClassKey {
    /// Builds a key with vendor defaults, filling year/semester from `term`.
    ///
    /// # Contract
    /// - `file_type` defaults to `"A"`.
    /// - `class_campus` defaults to `"S"`.
    pub fn for_term(class_code: impl Into<String>, term: AcademicTerm) -> Self {
        Self {
            class_code: class_code.into(),
            file_type: DEFAULT_FILE_TYPE.to_string(),
            file_year: term.file_year,
            file_semester: term.file_semester,
            class_campus: DEFAULT_CLASS_CAMPUS.to_string(),
        }
    }
}

impl Display for SubjectClassKey {
    /// Renders the key in filter form for lookup diagnostics.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ClassCode={} FileType={} FileYear={} FileSemester={} ClassCampus={}",
            self.class_code, self.file_type, self.file_year, self.file_semester, self.class_campus
        )
    }
}
