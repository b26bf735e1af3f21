use chrono::{NaiveDate, NaiveDateTime};
use rollbook_core::service::schedule_factory::DEFAULT_LESSON_MINUTES;
use rollbook_core::{create_staff_schedule, create_staff_schedule_at, StaffScheduleDraft};

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn minimal_draft_defaults_window_and_decomposes_parts() {
    let now = datetime(2024, 8, 19, 9, 15, 0);
    let draft = StaffScheduleDraft {
        staff_id: Some(51087),
        subject_classes_seq: Some(777),
        ..Default::default()
    };

    let record = create_staff_schedule_at(draft, now).unwrap();
    assert_eq!(record.schedule_date_time_from, now);
    assert_eq!(
        record.schedule_date_time_to,
        now + chrono::Duration::minutes(DEFAULT_LESSON_MINUTES)
    );
    assert_eq!(
        record.schedule_date_from,
        record.schedule_date_time_from.date()
    );
    assert_eq!(
        record.schedule_time_from,
        record.schedule_date_time_from.time()
    );
    assert_eq!(record.schedule_date_to, record.schedule_date_time_to.date());
    assert_eq!(record.schedule_time_to, record.schedule_date_time_to.time());
    assert_eq!(record.modified_datetime, now);
}

#[test]
fn explicit_start_gets_sixty_minute_end() {
    let draft = StaffScheduleDraft {
        staff_id: Some(51087),
        subject_classes_seq: Some(777),
        schedule_date_time_from: Some(datetime(2042, 3, 14, 15, 30, 0)),
        ..Default::default()
    };

    let record = create_staff_schedule(draft).unwrap();
    assert_eq!(
        record.schedule_date_time_to,
        datetime(2042, 3, 14, 16, 0, 0)
    );
    assert_eq!(
        record.schedule_date_from,
        NaiveDate::from_ymd_opt(2042, 3, 14).unwrap()
    );
    assert_eq!(record.schedule_time_from.to_string(), "15:30:00");
    assert_eq!(
        record.schedule_date_to,
        NaiveDate::from_ymd_opt(2042, 3, 14).unwrap()
    );
    assert_eq!(record.schedule_time_to.to_string(), "16:00:00");
}

#[test]
fn explicit_window_fields_are_preserved() {
    let from = datetime(2024, 2, 5, 8, 0, 0);
    let to = datetime(2024, 2, 5, 8, 45, 0);
    let modified = datetime(2024, 2, 1, 12, 0, 0);
    let draft = StaffScheduleDraft {
        staff_id: Some(42),
        subject_classes_seq: Some(1),
        schedule_date_time_from: Some(from),
        schedule_date_time_to: Some(to),
        modified_datetime: Some(modified),
        ..Default::default()
    };

    let record = create_staff_schedule_at(draft, datetime(2030, 1, 1, 0, 0, 0)).unwrap();
    assert_eq!(record.schedule_date_time_from, from);
    assert_eq!(record.schedule_date_time_to, to);
    assert_eq!(record.modified_datetime, modified);
}

#[test]
fn missing_subject_classes_seq_is_rejected() {
    let draft = StaffScheduleDraft {
        staff_id: Some(51087),
        schedule_date_time_from: Some(datetime(2042, 3, 14, 15, 30, 0)),
        comment: Some("orphan lesson".to_string()),
        ..Default::default()
    };

    let err = create_staff_schedule(draft).unwrap_err();
    assert_eq!(err.field, "SubjectClassesSeq");
    assert_eq!(err.record, "StaffSchedule");
}

#[test]
fn missing_staff_id_is_rejected() {
    let draft = StaffScheduleDraft {
        subject_classes_seq: Some(777),
        ..Default::default()
    };

    let err = create_staff_schedule(draft).unwrap_err();
    assert_eq!(err.field, "StaffID");
}

#[test]
fn identical_inputs_build_identical_records() {
    let now = datetime(2024, 8, 19, 9, 15, 0);
    let draft = StaffScheduleDraft {
        staff_id: Some(51087),
        subject_classes_seq: Some(777),
        room: Some("Gym".to_string()),
        staff_schedule_type_code: Some("TRAIN".to_string()),
        ..Default::default()
    };

    let first = create_staff_schedule_at(draft.clone(), now).unwrap();
    let second = create_staff_schedule_at(draft, now).unwrap();
    assert_eq!(first, second);
}

#[test]
fn absent_optionals_stay_unset() {
    let draft = StaffScheduleDraft {
        staff_id: Some(51087),
        subject_classes_seq: Some(777),
        ..Default::default()
    };

    let record = create_staff_schedule_at(draft, datetime(2024, 8, 19, 9, 0, 0)).unwrap();
    assert!(record.comment.is_none());
    assert!(record.room.is_none());
    assert!(record.parent_staff_schedule_seq.is_none());
    assert!(record.confirmed_datetime.is_none());
}
