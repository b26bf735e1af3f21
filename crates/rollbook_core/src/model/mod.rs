//! Typed records for the vendor tables this layer touches.
//!
//! # Responsibility
//! - Define the persisted record shapes and their caller-facing drafts.
//! - Keep field-level defaults and vendor column naming in one place.
//!
//! # Invariants
//! - Record structs hold only fully-resolved values; drafts hold the sparse
//!   caller input.
//! - Serde renames mirror the vendor's PascalCase column names exactly.

pub mod roll_entry;
pub mod staff_schedule;
pub mod subject_class;
