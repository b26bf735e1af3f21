//! Staff schedule occurrence factory.
//!
//! # Responsibility
//! - Validate and default a [`StaffScheduleDraft`] into a persistable
//!   occurrence record.
//!
//! # Invariants
//! - `StaffID` and `SubjectClassesSeq` are mandatory; everything else
//!   defaults.
//! - Date/time part fields always decompose the corresponding timestamps
//!   when they are not supplied explicitly.
//! - Pure: no store access, no persistence, no logging.

use crate::model::staff_schedule::{StaffScheduleDraft, StaffScheduleOccurrence};
use crate::service::MissingValueError;
use chrono::{Duration, Local, NaiveDateTime};

/// Default lesson length applied when the draft has a start but no end.
pub const DEFAULT_LESSON_MINUTES: i64 = 60;

/// Builds a staff schedule occurrence, defaulting time-window fields from
/// the current clock.
///
/// Defaulting order (each step only when the field is unset):
/// 1. `ScheduleDateTimeFrom` <- now.
/// 2. `ScheduleDateTimeTo` <- `ScheduleDateTimeFrom` + 60 minutes.
/// 3. `ScheduleDateFrom`/`ScheduleTimeFrom` <- parts of `From`.
/// 4. `ScheduleDateTo`/`ScheduleTimeTo` <- parts of `To`.
/// 5. `ModifiedDatetime` <- now.
///
/// # Errors
/// - [`MissingValueError`] when `StaffID` or `SubjectClassesSeq` is unset.
pub fn create_staff_schedule(
    draft: StaffScheduleDraft,
) -> Result<StaffScheduleOccurrence, MissingValueError> {
    create_staff_schedule_at(draft, Local::now().naive_local())
}

/// Clock-injected variant of [`create_staff_schedule`].
///
/// Identical inputs and an identical `now` always build field-for-field
/// identical records.
pub fn create_staff_schedule_at(
    draft: StaffScheduleDraft,
    now: NaiveDateTime,
) -> Result<StaffScheduleOccurrence, MissingValueError> {
    let staff_id = draft.staff_id.ok_or(MissingValueError {
        record: "StaffSchedule",
        field: "StaffID",
    })?;
    let subject_classes_seq = draft.subject_classes_seq.ok_or(MissingValueError {
        record: "StaffSchedule",
        field: "SubjectClassesSeq",
    })?;

    let from = draft.schedule_date_time_from.unwrap_or(now);
    let to = draft
        .schedule_date_time_to
        .unwrap_or_else(|| from + Duration::minutes(DEFAULT_LESSON_MINUTES));

    Ok(StaffScheduleOccurrence {
        staff_id,
        subject_classes_seq,
        schedule_date_time_from: from,
        schedule_date_time_to: to,
        schedule_date_from: draft.schedule_date_from.unwrap_or_else(|| from.date()),
        schedule_time_from: draft.schedule_time_from.unwrap_or_else(|| from.time()),
        schedule_date_to: draft.schedule_date_to.unwrap_or_else(|| to.date()),
        schedule_time_to: draft.schedule_time_to.unwrap_or_else(|| to.time()),
        modified_datetime: draft.modified_datetime.unwrap_or(now),
        comment: draft.comment,
        room: draft.room,
        team_code: draft.team_code,
        class_type: draft.class_type,
        parent_staff_schedule_seq: draft.parent_staff_schedule_seq,
        timesheets_seq: draft.timesheets_seq,
        attendance_created_by_date: draft.attendance_created_by_date,
        attendance_created_by_id: draft.attendance_created_by_id,
        attendance_modified_by_date: draft.attendance_modified_by_date,
        attendance_modified_by_id: draft.attendance_modified_by_id,
        location_code: draft.location_code,
        staff_schedule_type_code: draft.staff_schedule_type_code,
        results: draft.results,
        summary_notes: draft.summary_notes,
        opposition: draft.opposition,
        confirmed_datetime: draft.confirmed_datetime,
        confirmed_by_user: draft.confirmed_by_user,
        system_process_number: draft.system_process_number,
    })
}
