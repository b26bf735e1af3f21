//! Staff schedule occurrence record and its draft.
//!
//! # Responsibility
//! - Define the `StaffSchedule` persisted shape (one lesson/session).
//! - Define the sparse draft callers hand to the schedule factory.
//!
//! # Invariants
//! - `schedule_date_from`/`schedule_time_from` are the date/time
//!   decomposition of `schedule_date_time_from`; likewise for the `to` side.
//!   The store models them as separate columns, so both are persisted.
//! - `None` optional fields are omitted from the INSERT so store-side
//!   column defaults apply.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One scheduled lesson/session for a staff member, fully resolved and
/// ready for persistence.
///
/// The surrogate `StaffScheduleSeq` is assigned by the store on insert and
/// is not part of this record; vendor trigger semantics make it
/// unretrievable in the inserting call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffScheduleOccurrence {
    #[serde(rename = "StaffID")]
    pub staff_id: i64,
    /// Must reference an existing `SubjectClasses` row.
    #[serde(rename = "SubjectClassesSeq")]
    pub subject_classes_seq: i64,
    #[serde(rename = "ScheduleDateTimeFrom")]
    pub schedule_date_time_from: NaiveDateTime,
    #[serde(rename = "ScheduleDateTimeTo")]
    pub schedule_date_time_to: NaiveDateTime,
    #[serde(rename = "ScheduleDateFrom")]
    pub schedule_date_from: NaiveDate,
    #[serde(rename = "ScheduleTimeFrom")]
    pub schedule_time_from: NaiveTime,
    #[serde(rename = "ScheduleDateTo")]
    pub schedule_date_to: NaiveDate,
    #[serde(rename = "ScheduleTimeTo")]
    pub schedule_time_to: NaiveTime,
    #[serde(rename = "ModifiedDatetime")]
    pub modified_datetime: NaiveDateTime,

    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "Room", skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// Always blank for academic schedules; observed used by sport.
    #[serde(rename = "TeamCode", skip_serializing_if = "Option::is_none")]
    pub team_code: Option<String>,
    #[serde(rename = "ClassType", skip_serializing_if = "Option::is_none")]
    pub class_type: Option<String>,
    /// Seq of the first lesson of a repeating series. Many occurrences may
    /// point at one parent; existence is not validated by this layer.
    #[serde(
        rename = "ParentStaffScheduleSeq",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_staff_schedule_seq: Option<i64>,
    #[serde(rename = "TimesheetsSeq", skip_serializing_if = "Option::is_none")]
    pub timesheets_seq: Option<i64>,
    #[serde(
        rename = "AttendanceCreatedByDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub attendance_created_by_date: Option<NaiveDateTime>,
    #[serde(
        rename = "AttendanceCreatedByID",
        skip_serializing_if = "Option::is_none"
    )]
    pub attendance_created_by_id: Option<i64>,
    #[serde(
        rename = "AttendanceModifiedByDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub attendance_modified_by_date: Option<NaiveDateTime>,
    #[serde(
        rename = "AttendanceModifiedByID",
        skip_serializing_if = "Option::is_none"
    )]
    pub attendance_modified_by_id: Option<i64>,
    /// Code from `luLocation`.
    #[serde(rename = "LocationCode", skip_serializing_if = "Option::is_none")]
    pub location_code: Option<String>,
    /// Code from `luStaffScheduleType` (training, rehearsal, ...).
    #[serde(
        rename = "StaffScheduleTypeCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub staff_schedule_type_code: Option<String>,
    #[serde(rename = "Results", skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(rename = "SummaryNotes", skip_serializing_if = "Option::is_none")]
    pub summary_notes: Option<String>,
    #[serde(rename = "Opposition", skip_serializing_if = "Option::is_none")]
    pub opposition: Option<String>,
    #[serde(rename = "ConfirmedDateTime", skip_serializing_if = "Option::is_none")]
    pub confirmed_datetime: Option<NaiveDateTime>,
    #[serde(rename = "ConfirmedByUser", skip_serializing_if = "Option::is_none")]
    pub confirmed_by_user: Option<String>,
    #[serde(
        rename = "SystemProcessNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_process_number: Option<i64>,
}

/// Sparse caller input for the schedule factory.
///
/// Every field is independently settable; unset fields are defaulted or
/// rejected by [`crate::service::schedule_factory::create_staff_schedule`].
/// `StaffID` and `SubjectClassesSeq` are the two mandatory fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffScheduleDraft {
    pub staff_id: Option<i64>,
    pub subject_classes_seq: Option<i64>,
    pub schedule_date_time_from: Option<NaiveDateTime>,
    pub schedule_date_time_to: Option<NaiveDateTime>,
    pub schedule_date_from: Option<NaiveDate>,
    pub schedule_time_from: Option<NaiveTime>,
    pub schedule_date_to: Option<NaiveDate>,
    pub schedule_time_to: Option<NaiveTime>,
    pub modified_datetime: Option<NaiveDateTime>,
    pub comment: Option<String>,
    pub room: Option<String>,
    pub team_code: Option<String>,
    pub class_type: Option<String>,
    pub parent_staff_schedule_seq: Option<i64>,
    pub timesheets_seq: Option<i64>,
    pub attendance_created_by_date: Option<NaiveDateTime>,
    pub attendance_created_by_id: Option<i64>,
    pub attendance_modified_by_date: Option<NaiveDateTime>,
    pub attendance_modified_by_id: Option<i64>,
    pub location_code: Option<String>,
    pub staff_schedule_type_code: Option<String>,
    pub results: Option<String>,
    pub summary_notes: Option<String>,
    pub opposition: Option<String>,
    pub confirmed_datetime: Option<NaiveDateTime>,
    pub confirmed_by_user: Option<String>,
    pub system_process_number: Option<i64>,
}
