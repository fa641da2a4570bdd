//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert rows
//! directly through SeaORM, bypassing the application's services.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let school = factory::school::create_school(&db).await?;
//! let student = factory::student::StudentFactory::new(&db, school.id)
//!     .roll_number("4242")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod school;
pub mod student;

pub use school::create_school;
pub use student::create_student;
