//! Education record types and boundary validation
//!
//! Wire names contain spaces and slashes (`race/ethnicity`,
//! `math score`, ...) and are kept byte-for-byte for existing callers.
//! Inside the crate every field has a snake_case name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use super::ValidationError;

/// Maximum length for the free-form category fields
const MAX_FIELD_LEN: usize = 128;

/// Lowest accepted score
pub const MIN_SCORE: i64 = 0;

/// Highest accepted score
pub const MAX_SCORE: i64 = 100;

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Fresh random id, for stores that assign ids in-process.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "invalid UUID format",
            })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Every data field of a record, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationFields {
    pub gender: String,
    #[serde(rename = "race/ethnicity")]
    pub race_ethnicity: String,
    #[serde(rename = "parental level of education")]
    pub parental_education_level: String,
    pub lunch: String,
    #[serde(rename = "test preparation course")]
    pub test_preparation_course: String,
    #[serde(rename = "math score")]
    pub math_score: i32,
    #[serde(rename = "reading score")]
    pub reading_score: i32,
    #[serde(rename = "writing score")]
    pub writing_score: i32,
}

impl EducationFields {
    /// True when all three scores reach `threshold`.
    pub fn meets_threshold(&self, threshold: i32) -> bool {
        self.math_score >= threshold
            && self.reading_score >= threshold
            && self.writing_score >= threshold
    }
}

/// A stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: EducationFields,
}

/// Raw create/update body as sent by callers.
///
/// Every field is optional here so that a missing field surfaces as a
/// `ValidationError::Missing` naming it, rather than a generic decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationPayload {
    pub gender: Option<String>,
    #[serde(rename = "race/ethnicity")]
    pub race_ethnicity: Option<String>,
    #[serde(rename = "parental level of education")]
    pub parental_education_level: Option<String>,
    pub lunch: Option<String>,
    #[serde(rename = "test preparation course")]
    pub test_preparation_course: Option<String>,
    #[serde(rename = "math score")]
    pub math_score: Option<Number>,
    #[serde(rename = "reading score")]
    pub reading_score: Option<Number>,
    #[serde(rename = "writing score")]
    pub writing_score: Option<Number>,
}

impl EducationPayload {
    /// Check every field and produce the validated field set.
    ///
    /// # Rules
    /// - All eight fields are required
    /// - Text fields: non-blank, at most 128 characters
    /// - Scores: integers in 0..=100
    pub fn validate(self) -> Result<EducationFields, ValidationError> {
        Ok(EducationFields {
            gender: text("gender", self.gender)?,
            race_ethnicity: text("race/ethnicity", self.race_ethnicity)?,
            parental_education_level: text(
                "parental level of education",
                self.parental_education_level,
            )?,
            lunch: text("lunch", self.lunch)?,
            test_preparation_course: text("test preparation course", self.test_preparation_course)?,
            math_score: score("math score", self.math_score)?,
            reading_score: score("reading score", self.reading_score)?,
            writing_score: score("writing score", self.writing_score)?,
        })
    }
}

fn text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;

    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }

    Ok(value)
}

fn score(field: &'static str, value: Option<Number>) -> Result<i32, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;

    let n = value.as_i64().ok_or(ValidationError::InvalidFormat {
        field,
        reason: "must be a whole number",
    })?;

    if !(MIN_SCORE..=MAX_SCORE).contains(&n) {
        return Err(ValidationError::OutOfRange {
            field,
            value: n,
            min: MIN_SCORE,
            max: MAX_SCORE,
        });
    }

    // Range checked above
    Ok(n as i32)
}
