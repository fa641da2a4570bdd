use crate::server::error::AppError;

/// Requires a text field to contain something other than whitespace
///
/// # Arguments
/// - `field` - JSON name of the field, used in the error message
/// - `value` - The submitted value
///
/// # Returns
/// - `Ok(String)` - The value, unchanged
/// - `Err(AppError::BadRequest)` - `"<field> is mandatory"`
pub fn require_text(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(mandatory(field));
    }

    Ok(value)
}

/// Requires an optional field to be present
///
/// # Returns
/// - `Ok(T)` - The present value
/// - `Err(AppError::BadRequest)` - `"<field> is mandatory"`
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| mandatory(field))
}

fn mandatory(field: &str) -> AppError {
    AppError::BadRequest(format!("{} is mandatory", field))
}
