//! Staff schedule persistence: insert contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist fully-built occurrence and roll entry records as single-row
//!   inserts.
//! - Assemble column lists dynamically so `None` optionals are omitted and
//!   store-side column defaults apply.
//!
//! # Invariants
//! - Inserts never read generated surrogate keys back; the vendor's trigger
//!   semantics forbid output clauses on these tables.
//! - Store failures (constraints, connectivity) pass through unmodified as
//!   `DbError` sources.

use crate::db::DbResult;
use crate::model::roll_entry::StaffScheduleRollEntry;
use crate::model::staff_schedule::StaffScheduleOccurrence;
use rusqlite::{params_from_iter, Connection, ToSql};

/// Persistence interface for schedule occurrences and roll entries.
pub trait StaffScheduleRepository {
    /// Inserts one occurrence into `StaffSchedule`.
    fn insert_schedule(&self, record: &StaffScheduleOccurrence) -> DbResult<()>;
    /// Inserts one roll entry into `StaffScheduleStudentClasses`.
    fn insert_roll_entry(&self, record: &StaffScheduleRollEntry) -> DbResult<()>;
}

/// SQLite-backed staff schedule persistence.
pub struct SqliteStaffScheduleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStaffScheduleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StaffScheduleRepository for SqliteStaffScheduleRepository<'_> {
    fn insert_schedule(&self, record: &StaffScheduleOccurrence) -> DbResult<()> {
        let mut insert = InsertBuilder::new("StaffSchedule");

        insert.column("StaffID", Box::new(record.staff_id));
        insert.column("SubjectClassesSeq", Box::new(record.subject_classes_seq));
        insert.column(
            "ScheduleDateTimeFrom",
            Box::new(record.schedule_date_time_from),
        );
        insert.column("ScheduleDateTimeTo", Box::new(record.schedule_date_time_to));
        insert.column("ScheduleDateFrom", Box::new(record.schedule_date_from));
        insert.column("ScheduleTimeFrom", Box::new(record.schedule_time_from));
        insert.column("ScheduleDateTo", Box::new(record.schedule_date_to));
        insert.column("ScheduleTimeTo", Box::new(record.schedule_time_to));
        insert.column("ModifiedDatetime", Box::new(record.modified_datetime));

        insert.optional_column("Comment", record.comment.clone());
        insert.optional_column("Room", record.room.clone());
        insert.optional_column("TeamCode", record.team_code.clone());
        insert.optional_column("ClassType", record.class_type.clone());
        insert.optional_column(
            "ParentStaffScheduleSeq",
            record.parent_staff_schedule_seq,
        );
        insert.optional_column("TimesheetsSeq", record.timesheets_seq);
        insert.optional_column(
            "AttendanceCreatedByDate",
            record.attendance_created_by_date,
        );
        insert.optional_column("AttendanceCreatedByID", record.attendance_created_by_id);
        insert.optional_column(
            "AttendanceModifiedByDate",
            record.attendance_modified_by_date,
        );
        insert.optional_column(
            "AttendanceModifiedByID",
            record.attendance_modified_by_id,
        );
        insert.optional_column("LocationCode", record.location_code.clone());
        insert.optional_column(
            "StaffScheduleTypeCode",
            record.staff_schedule_type_code.clone(),
        );
        insert.optional_column("Results", record.results.clone());
        insert.optional_column("SummaryNotes", record.summary_notes.clone());
        insert.optional_column("Opposition", record.opposition.clone());
        insert.optional_column("ConfirmedDateTime", record.confirmed_datetime);
        insert.optional_column("ConfirmedByUser", record.confirmed_by_user.clone());
        insert.optional_column("SystemProcessNumber", record.system_process_number);

        insert.execute(self.conn)
    }

    fn insert_roll_entry(&self, record: &StaffScheduleRollEntry) -> DbResult<()> {
        let mut insert = InsertBuilder::new("StaffScheduleStudentClasses");

        insert.column("StaffScheduleSeq", Box::new(record.staff_schedule_seq));
        insert.column("ID", Box::new(record.student_id));
        insert.column("ClassCode", Box::new(record.class_code.clone()));
        insert.column("FileType", Box::new(record.file_type.clone()));
        insert.column("FileYear", Box::new(record.file_year));
        insert.column("FileSemester", Box::new(record.file_semester));
        insert.column("ClassCampus", Box::new(record.class_campus.clone()));
        insert.column("SubjectClassesSeq", Box::new(record.subject_classes_seq));
        insert.column("AttendedFlag", Box::new(record.attended_flag.to_db()));

        insert.optional_column(
            "PossibleAbsenceCode",
            record.possible_absence_code.clone(),
        );
        insert.optional_column("PossibleReasonCode", record.possible_reason_code.clone());
        insert.optional_column(
            "PossibleDescription",
            record.possible_description.clone(),
        );
        insert.optional_column("ConfirmedDateTime", record.confirmed_datetime);
        insert.optional_column("ConfirmedByUser", record.confirmed_by_user.clone());

        insert.execute(self.conn)
    }
}

/// Accumulates column/value pairs for a single-row INSERT.
///
/// Only columns registered here appear in the statement, which is what lets
/// store-side defaults apply to omitted optionals.
struct InsertBuilder {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<Box<dyn ToSql>>,
}

impl InsertBuilder {
    fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    fn column(&mut self, column: &'static str, value: Box<dyn ToSql>) {
        self.columns.push(column);
        self.values.push(value);
    }

    fn optional_column<T: ToSql + 'static>(&mut self, column: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.column(column, Box::new(value));
        }
    }

    fn execute(self, conn: &Connection) -> DbResult<()> {
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.table,
            self.columns.join(", "),
            placeholders
        );
        conn.execute(&sql, params_from_iter(self.values.iter()))?;
        Ok(())
    }
}
