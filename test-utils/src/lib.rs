//! Student Registry Test Utils
//!
//! Provides shared testing utilities for building tests for the student registry. This crate
//! offers a builder pattern for creating test contexts with in-memory SQLite databases and
//! factories for inserting school and student rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_registry_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (school, student) = factory::helpers::create_student_with_school(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
