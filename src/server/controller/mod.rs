//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated parameters, call the services and turn
//! domain models back into DTOs. Error mapping to status codes is done by `AppError`.

pub mod extract;
pub mod school;
pub mod student;
