//! Typed data-access layer over a third-party school-management database.
//!
//! Callers construct staff schedule occurrences, roll entries and subject
//! class lookups without hand-writing SQL: sparse drafts go through
//! validation, defaulting and directory resolution in `service`, and the
//! resulting records are persisted through `repo`. The vendor schema's
//! peculiarities (surrogate keys, composite natural keys, trigger-based
//! output restrictions) are honored in one place.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AcademicTerm, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::roll_entry::{AttendanceFlag, RollEntryDraft, StaffScheduleRollEntry};
pub use model::staff_schedule::{StaffScheduleDraft, StaffScheduleOccurrence};
pub use model::subject_class::{SubjectClass, SubjectClassKey};
pub use repo::staff_schedule_repo::{SqliteStaffScheduleRepository, StaffScheduleRepository};
pub use repo::subject_class_repo::{
    LookupError, LookupResult, SqliteSubjectClassRepository, SubjectClassRepository,
};
pub use service::roll_factory::{RollError, RollFactory};
pub use service::schedule_factory::{create_staff_schedule, create_staff_schedule_at};
pub use service::MissingValueError;
