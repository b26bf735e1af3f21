//! Record construction factories.
//!
//! # Responsibility
//! - Turn sparse drafts into fully-populated records through validation,
//!   defaulting and directory resolution.
//! - Keep factories side-effect free apart from the roll factory's single
//!   directory read.
//!
//! # Invariants
//! - Mandatory-field validation happens before any store access.
//! - Factories never persist; built records are handed to the repository
//!   layer by the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod roll_factory;
pub mod schedule_factory;

/// A mandatory identifying field was not supplied in a draft.
///
/// Raised fail-fast, before any store access is attempted. Terminal for the
/// current operation; there is no partial-success state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingValueError {
    /// Record type the draft was meant to build.
    pub record: &'static str,
    /// Vendor column name of the missing field.
    pub field: &'static str,
}

impl Display for MissingValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is required to create a {} record but is missing",
            self.field, self.record
        )
    }
}

impl Error for MissingValueError {}
