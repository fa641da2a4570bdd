//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from request
//! DTOs and are the point where request validation happens, so a parameter value is always
//! safe to persist.

pub mod school;
pub mod student;
