use rand::Rng;

/// Smallest roll number handed out.
pub const MIN_ROLL_NUMBER: u16 = 1000;
/// Largest roll number handed out.
pub const MAX_ROLL_NUMBER: u16 = 9999;

/// Draws a four digit roll number uniformly from `1000..=9999`.
///
/// No uniqueness check is made against existing students.
pub fn generate_roll_number() -> String {
    rand::rng()
        .random_range(MIN_ROLL_NUMBER..=MAX_ROLL_NUMBER)
        .to_string()
}
