//! Gender filter accepted by the count endpoint

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Gender value accepted by `/countByGender`.
///
/// Stored records keep `gender` as a free-form string; only the query side
/// is restricted to these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The stored string this variant matches.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Parse an optional query parameter; absence is an error.
    pub fn from_param(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            None => Err(ValidationError::Missing { field: "gender" }),
            Some(v) => v.parse(),
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(ValidationError::InvalidVariant {
                field: "gender",
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn rejects_other_values() {
        let err = "cat".parse::<Gender>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVariant { .. }));

        // Matching is exact, as in the stored data
        assert!("Male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn missing_param() {
        let err = Gender::from_param(None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "gender" });
    }
}
