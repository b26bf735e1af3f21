//! Roll entry record (one student's attendance mark) and its draft.
//!
//! # Responsibility
//! - Define the `StaffScheduleStudentClasses` persisted shape.
//! - Model the tri-state attendance intent explicitly.
//!
//! # Invariants
//! - A persisted entry always resolves to exactly one subject class.
//! - `AttendedFlag` is stored as 0/1; the unset draft state defaults to
//!   attended at build time, never at read time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Attendance intent stored in `AttendedFlag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceFlag {
    /// Student was absent (flag 0).
    NotAttended,
    /// Student attended (flag 1).
    Attended,
}

impl AttendanceFlag {
    /// Vendor column encoding.
    pub fn to_db(self) -> i64 {
        match self {
            Self::NotAttended => 0,
            Self::Attended => 1,
        }
    }

    /// Parses the vendor column encoding; anything but 0/1 is invalid.
    pub fn from_db(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::NotAttended),
            1 => Some(Self::Attended),
            _ => None,
        }
    }
}

/// One student's attendance mark against a staff schedule occurrence,
/// fully resolved and ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffScheduleRollEntry {
    /// The occurrence this mark belongs to.
    #[serde(rename = "StaffScheduleSeq")]
    pub staff_schedule_seq: i64,
    /// Student ID; the vendor convention stores 0 when unknown.
    #[serde(rename = "ID")]
    pub student_id: i64,
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
    /// Resolved through the subject class directory when not supplied.
    #[serde(rename = "SubjectClassesSeq")]
    pub subject_classes_seq: i64,
    #[serde(rename = "AttendedFlag")]
    pub attended_flag: AttendanceFlag,
    /// Code from `luAbsenceType`.
    #[serde(
        rename = "PossibleAbsenceCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub possible_absence_code: Option<String>,
    /// Code from `luAbsenceReason`.
    #[serde(rename = "PossibleReasonCode", skip_serializing_if = "Option::is_none")]
    pub possible_reason_code: Option<String>,
    #[serde(
        rename = "PossibleDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub possible_description: Option<String>,
    #[serde(rename = "ConfirmedDateTime", skip_serializing_if = "Option::is_none")]
    pub confirmed_datetime: Option<NaiveDateTime>,
    #[serde(rename = "ConfirmedByUser", skip_serializing_if = "Option::is_none")]
    pub confirmed_by_user: Option<String>,
}

/// Sparse caller input for the roll factory.
///
/// `StaffScheduleSeq` and `ClassCode` are mandatory. `SubjectClassesSeq`
/// short-circuits the directory lookup when supplied directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollEntryDraft {
    pub staff_schedule_seq: Option<i64>,
    pub student_id: Option<i64>,
    pub class_code: Option<String>,
    pub file_type: Option<String>,
    pub file_year: Option<i32>,
    pub file_semester: Option<i32>,
    pub class_campus: Option<String>,
    pub subject_classes_seq: Option<i64>,
    pub attended_flag: Option<AttendanceFlag>,
    pub possible_absence_code: Option<String>,
    pub possible_reason_code: Option<String>,
    pub possible_description: Option<String>,
    pub confirmed_datetime: Option<NaiveDateTime>,
    pub confirmed_by_user: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::AttendanceFlag;

    #[test]
    fn attendance_flag_round_trips_vendor_encoding() {
        assert_eq!(AttendanceFlag::Attended.to_db(), 1);
        assert_eq!(AttendanceFlag::NotAttended.to_db(), 0);
        assert_eq!(AttendanceFlag::from_db(1), Some(AttendanceFlag::Attended));
        assert_eq!(
            AttendanceFlag::from_db(0),
            Some(AttendanceFlag::NotAttended)
        );
        assert_eq!(AttendanceFlag::from_db(2), None);
    }
}
