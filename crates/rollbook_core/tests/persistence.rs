use chrono::{NaiveDate, NaiveDateTime};
use rollbook_core::db::open_db_in_memory;
use rollbook_core::{
    create_staff_schedule_at, AcademicTerm, RollEntryDraft, RollFactory,
    SqliteStaffScheduleRepository, SqliteSubjectClassRepository, StaffScheduleDraft,
    StaffScheduleRepository,
};
use rusqlite::{params, Connection};

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn seed_class(conn: &Connection, class_code: &str) -> i64 {
    conn.execute(
        "INSERT INTO SubjectClasses (ClassCode, FileType, FileYear, FileSemester, ClassCampus)
         VALUES (?1, 'A', 2022, 1, 'S');",
        params![class_code],
    )
    .unwrap();
    conn.last_insert_rowid()
}

#[test]
fn inserted_schedule_lets_store_defaults_fill_omitted_optionals() {
    let conn = open_db_in_memory().unwrap();
    let class_seq = seed_class(&conn, "13FUN01");

    let record = create_staff_schedule_at(
        StaffScheduleDraft {
            staff_id: Some(51087),
            subject_classes_seq: Some(class_seq),
            schedule_date_time_from: Some(datetime(2042, 3, 14, 15, 30, 0)),
            room: Some("Gym".to_string()),
            ..Default::default()
        },
        datetime(2042, 3, 1, 8, 0, 0),
    )
    .unwrap();

    let repo = SqliteStaffScheduleRepository::new(&conn);
    repo.insert_schedule(&record).unwrap();

    // Omitted Comment falls back to the column default; supplied Room does not.
    let (staff_id, comment, room, time_to): (i64, String, String, String) = conn
        .query_row(
            "SELECT StaffID, Comment, Room, ScheduleTimeTo FROM StaffSchedule;",
            [],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                ))
            },
        )
        .unwrap();
    assert_eq!(staff_id, 51087);
    assert_eq!(comment, "");
    assert_eq!(room, "Gym");
    assert!(time_to.starts_with("16:00:00"));
}

#[test]
fn inserted_schedule_round_trips_typed_window_fields() {
    let conn = open_db_in_memory().unwrap();
    let class_seq = seed_class(&conn, "10ENG01");

    let record = create_staff_schedule_at(
        StaffScheduleDraft {
            staff_id: Some(42),
            subject_classes_seq: Some(class_seq),
            schedule_date_time_from: Some(datetime(2024, 2, 5, 8, 0, 0)),
            ..Default::default()
        },
        datetime(2024, 2, 1, 12, 0, 0),
    )
    .unwrap();

    let repo = SqliteStaffScheduleRepository::new(&conn);
    repo.insert_schedule(&record).unwrap();

    let (from, to): (NaiveDateTime, NaiveDateTime) = conn
        .query_row(
            "SELECT ScheduleDateTimeFrom, ScheduleDateTimeTo FROM StaffSchedule;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(from, record.schedule_date_time_from);
    assert_eq!(to, record.schedule_date_time_to);
}

#[test]
fn schedule_insert_does_not_report_generated_key() {
    let conn = open_db_in_memory().unwrap();
    let class_seq = seed_class(&conn, "10ENG01");

    let record = create_staff_schedule_at(
        StaffScheduleDraft {
            staff_id: Some(42),
            subject_classes_seq: Some(class_seq),
            ..Default::default()
        },
        datetime(2024, 2, 1, 12, 0, 0),
    )
    .unwrap();

    // The trait returns unit; callers who need the sequence query for it.
    let repo = SqliteStaffScheduleRepository::new(&conn);
    repo.insert_schedule(&record).unwrap();
    let seq: i64 = conn
        .query_row(
            "SELECT StaffScheduleSeq FROM StaffSchedule WHERE StaffID = 42;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(seq > 0);
}

#[test]
fn roll_entry_persists_against_existing_schedule() {
    let conn = open_db_in_memory().unwrap();
    let class_seq = seed_class(&conn, "13FUN01");

    let schedule = create_staff_schedule_at(
        StaffScheduleDraft {
            staff_id: Some(51087),
            subject_classes_seq: Some(class_seq),
            ..Default::default()
        },
        datetime(2022, 5, 2, 9, 0, 0),
    )
    .unwrap();
    let repo = SqliteStaffScheduleRepository::new(&conn);
    repo.insert_schedule(&schedule).unwrap();
    let schedule_seq: i64 = conn
        .query_row("SELECT StaffScheduleSeq FROM StaffSchedule;", [], |row| {
            row.get(0)
        })
        .unwrap();

    let factory = RollFactory::new(
        SqliteSubjectClassRepository::new(&conn),
        AcademicTerm::new(2022, 1),
    );
    let entry = factory
        .create_roll_entry(RollEntryDraft {
            staff_schedule_seq: Some(schedule_seq),
            class_code: Some("13FUN01".to_string()),
            student_id: Some(51047),
            ..Default::default()
        })
        .unwrap();
    repo.insert_roll_entry(&entry).unwrap();

    let (student_id, attended, confirmed_by): (i64, i64, String) = conn
        .query_row(
            "SELECT ID, AttendedFlag, ConfirmedByUser FROM StaffScheduleStudentClasses;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(student_id, 51047);
    assert_eq!(attended, 1);
    // Omitted ConfirmedByUser picks up the store default.
    assert_eq!(confirmed_by, "");
}

#[test]
fn roll_entry_insert_with_unknown_schedule_passes_constraint_error_through() {
    let conn = open_db_in_memory().unwrap();
    seed_class(&conn, "13FUN01");

    let factory = RollFactory::new(
        SqliteSubjectClassRepository::new(&conn),
        AcademicTerm::new(2022, 1),
    );
    let entry = factory
        .create_roll_entry(RollEntryDraft {
            staff_schedule_seq: Some(999_999),
            class_code: Some("13FUN01".to_string()),
            ..Default::default()
        })
        .unwrap();

    // The occurrence reference is only enforced at insert time, and the
    // store's own error surfaces unmodified.
    let repo = SqliteStaffScheduleRepository::new(&conn);
    let err = repo.insert_roll_entry(&entry).unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"));
}
