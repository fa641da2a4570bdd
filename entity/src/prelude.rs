pub use super::school::Entity as School;
pub use super::student::Entity as Student;
