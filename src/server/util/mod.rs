pub mod roll_number;
pub mod validate;
