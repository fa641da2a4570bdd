use thiserror::Error;

use crate::model::grade::InvalidGrade;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A grade column holds a value outside `G1`..`G10`.
    ///
    /// Rows are only written through validated parameters, so this points to manual
    /// edits of the database. Results in a 500 Internal Server Error with a generic
    /// message returned to client.
    #[error("Student {student_id} has stored grade '{value}': {source}")]
    InvalidStoredGrade {
        /// ID of the student row
        student_id: i32,
        /// The stored value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: InvalidGrade,
    },

    /// A student row was loaded without its school.
    ///
    /// The foreign key makes this impossible unless constraints were disabled.
    #[error("Student {student_id} references missing school {school_id}")]
    MissingSchool {
        /// ID of the student row
        student_id: i32,
        /// The dangling school ID
        school_id: i32,
    },

    /// The background task of a roll number lookup panicked or was aborted.
    #[error("Roll number lookup task did not complete: {0}")]
    LookupTask(#[from] tokio::task::JoinError),
}
