//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the rules that
//! span more than one row (a student needs an existing school, a school with students
//! cannot be deleted) and decide which missing rows are errors and which are answers.

pub mod school;
pub mod student;

#[cfg(test)]
mod test;
