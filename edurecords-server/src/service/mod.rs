//! Query and mutation layers
//!
//! Each operation issues exactly one store call. Layers borrow the store
//! for the duration of a request and keep no state of their own.

pub mod mutation;
pub mod query;

use std::fmt;
use std::str::FromStr;

use crate::db::DbError;
use crate::models::ValidationError;

pub use mutation::EducationMutations;
pub use query::EducationQueries;

/// Minimum for all three scores in the best-score filter.
///
/// Scores top out at 100, so the default only matches perfect records.
pub const BEST_SCORE_THRESHOLD: i32 = 100;

/// How update and delete answer for an id that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRecordPolicy {
    /// Update answers `null`, delete answers its confirmation
    #[default]
    Lenient,
    /// Both answer not found
    Strict,
}

impl MissingRecordPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for MissingRecordPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(ValidationError::InvalidVariant {
                field: "missing record policy",
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for MissingRecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunables shared by both layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordPolicy {
    pub best_score_threshold: i32,
    pub missing: MissingRecordPolicy,
}

impl Default for RecordPolicy {
    fn default() -> Self {
        Self {
            best_score_threshold: BEST_SCORE_THRESHOLD,
            missing: MissingRecordPolicy::default(),
        }
    }
}

/// Outcome of a layer operation other than success
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] DbError),
}

impl ServiceError {
    pub(crate) fn education_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "education",
            id: id.to_string(),
        }
    }
}
