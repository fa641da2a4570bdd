//! Grade codes accepted for a student.
//!
//! A grade is validated the moment it is deserialized, so a request carrying `"G11"` or
//! `"first"` never produces a DTO at all.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error produced when a string is not one of `G1`..`G10`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid grade value must be like G1 to G10")]
pub struct InvalidGrade;

/// School grade, `G1` through `G10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    G1,
    G2,
    G3,
    G4,
    G5,
    G6,
    G7,
    G8,
    G9,
    G10,
}

impl Grade {
    pub const ALL: [Grade; 10] = [
        Grade::G1,
        Grade::G2,
        Grade::G3,
        Grade::G4,
        Grade::G5,
        Grade::G6,
        Grade::G7,
        Grade::G8,
        Grade::G9,
        Grade::G10,
    ];

    /// Canonical upper-case code, as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::G1 => "G1",
            Grade::G2 => "G2",
            Grade::G3 => "G3",
            Grade::G4 => "G4",
            Grade::G5 => "G5",
            Grade::G6 => "G6",
            Grade::G7 => "G7",
            Grade::G8 => "G8",
            Grade::G9 => "G9",
            Grade::G10 => "G10",
        }
    }
}

/// Parses a grade code case-insensitively (`g3` and `G3` are the same grade).
impl FromStr for Grade {
    type Err = InvalidGrade;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(value))
            .ok_or(InvalidGrade)
    }
}

impl TryFrom<String> for Grade {
    type Error = InvalidGrade;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.as_str().to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
