//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod gender;
pub mod record;
pub mod validation;

pub use gender::Gender;
pub use record::{EducationFields, EducationPayload, EducationRecord, RecordId};
pub use validation::ValidationError;
