//! Roll entry factory.
//!
//! # Responsibility
//! - Validate and default a [`RollEntryDraft`] into a persistable roll
//!   entry, resolving the subject class through the directory when the
//!   surrogate sequence is not supplied directly.
//!
//! # Invariants
//! - `StaffScheduleSeq` and `ClassCode` are mandatory, checked before any
//!   store access.
//! - Directory lookup failures propagate unchanged; an ambiguous class is
//!   never resolved by picking one.
//! - Side effects: at most one read, never a write.

use crate::config::AcademicTerm;
use crate::model::roll_entry::{AttendanceFlag, RollEntryDraft, StaffScheduleRollEntry};
use crate::model::subject_class::{SubjectClassKey, DEFAULT_CLASS_CAMPUS, DEFAULT_FILE_TYPE};
use crate::repo::subject_class_repo::{LookupError, SubjectClassRepository};
use crate::service::MissingValueError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Roll factory failure: either a missing mandatory field or a failed
/// subject class resolution.
#[derive(Debug)]
pub enum RollError {
    MissingValue(MissingValueError),
    Lookup(LookupError),
}

impl Display for RollError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue(err) => write!(f, "{err}"),
            Self::Lookup(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RollError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingValue(err) => Some(err),
            Self::Lookup(err) => Some(err),
        }
    }
}

impl From<MissingValueError> for RollError {
    fn from(value: MissingValueError) -> Self {
        Self::MissingValue(value)
    }
}

impl From<LookupError> for RollError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

/// Builds roll entries against an injected subject class directory and
/// academic term.
///
/// The term supplies `FileYear`/`FileSemester` defaults for class
/// resolution when the draft leaves them unset.
pub struct RollFactory<R: SubjectClassRepository> {
    directory: R,
    term: AcademicTerm,
}

impl<R: SubjectClassRepository> RollFactory<R> {
    /// Creates a factory from a directory implementation and a resolved term.
    pub fn new(directory: R, term: AcademicTerm) -> Self {
        Self { directory, term }
    }

    /// Builds one roll entry from a sparse draft.
    ///
    /// Resolution order:
    /// 1. Fail fast on missing `StaffScheduleSeq` or `ClassCode`.
    /// 2. When `SubjectClassesSeq` is unset, resolve it through the
    ///    directory using the class code plus supplied-or-defaulted
    ///    `FileType`/`FileYear`/`FileSemester`/`ClassCampus`.
    /// 3. `AttendedFlag` defaults to attended; an explicit value is kept.
    ///
    /// # Errors
    /// - `RollError::MissingValue` for absent mandatory fields.
    /// - `RollError::Lookup` propagated unchanged from the directory.
    pub fn create_roll_entry(
        &self,
        draft: RollEntryDraft,
    ) -> Result<StaffScheduleRollEntry, RollError> {
        let staff_schedule_seq = draft.staff_schedule_seq.ok_or(MissingValueError {
            record: "StaffScheduleStudentClasses",
            field: "StaffScheduleSeq",
        })?;
        let class_code = draft.class_code.ok_or(MissingValueError {
            record: "StaffScheduleStudentClasses",
            field: "ClassCode",
        })?;

        let file_type = draft
            .file_type
            .unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string());
        let file_year = draft.file_year.unwrap_or(self.term.file_year);
        let file_semester = draft.file_semester.unwrap_or(self.term.file_semester);
        let class_campus = draft
            .class_campus
            .unwrap_or_else(|| DEFAULT_CLASS_CAMPUS.to_string());

        let subject_classes_seq = match draft.subject_classes_seq {
            Some(seq) => seq,
            None => {
                let key = SubjectClassKey {
                    class_code: class_code.clone(),
                    file_type: file_type.clone(),
                    file_year,
                    file_semester,
                    class_campus: class_campus.clone(),
                };
                self.directory.find_by_key(&key)?.subject_classes_seq
            }
        };

        Ok(StaffScheduleRollEntry {
            staff_schedule_seq,
            student_id: draft.student_id.unwrap_or(0),
            class_code,
            file_type,
            file_year,
            file_semester,
            class_campus,
            subject_classes_seq,
            attended_flag: draft.attended_flag.unwrap_or(AttendanceFlag::Attended),
            possible_absence_code: draft.possible_absence_code,
            possible_reason_code: draft.possible_reason_code,
            possible_description: draft.possible_description,
            confirmed_datetime: draft.confirmed_datetime,
            confirmed_by_user: draft.confirmed_by_user,
        })
    }
}
