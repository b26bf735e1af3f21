//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the lookup and persistence contracts the factories depend on.
//! - Isolate SQLite query details from factory orchestration.
//!
//! # Invariants
//! - Lookup APIs require exactly one match; zero or multiple rows surface
//!   as semantic `LookupError`s, never as an arbitrary pick.
//! - Insert APIs never read generated keys back (vendor trigger semantics).

pub mod staff_schedule_repo;
pub mod subject_class_repo;
