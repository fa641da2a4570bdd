//! Database repository layer for schools and students.
//!
//! Repositories borrow the `DatabaseConnection`, use SeaORM entity models internally and
//! return domain models so the service layer never sees the persisted shape.

pub mod school;
pub mod student;
