//! SeaORM entities for the persisted school and student records.

pub mod prelude;

pub mod school;
pub mod student;
