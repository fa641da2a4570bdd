//! Transfer objects exchanged with API clients.
//!
//! Field names follow the public JSON contract (`studentName`, `schoolId`, ...), which is
//! why most types here carry serde renames.

pub mod api;
pub mod grade;
pub mod school;
pub mod student;
