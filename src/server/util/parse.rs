use crate::server::{
    error::{internal::InternalError, AppError},
    model::status::AcceptanceStatus,
};

/// Parses a persisted acceptance status string.
///
/// # Arguments
/// - `value` - The stored status string
/// - `table` - Table the row was read from, for the error message
/// - `id` - Primary key of the row, for the error message
///
/// # Returns
/// - `Ok(AcceptanceStatus)` - Successfully parsed status
/// - `Err(AppError::InternalErr(UnknownStatus))` - The string is not a known status
pub fn parse_acceptance_status(
    value: String,
    table: &'static str,
    id: i32,
) -> Result<AcceptanceStatus, AppError> {
    let status = AcceptanceStatus::parse(&value)
        .ok_or(InternalError::UnknownStatus { value, table, id })?;

    Ok(status)
}

/// Trims a required text field, rejecting it when empty.
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::BadRequest)` - The value was empty or whitespace only
pub fn require_text(value: String, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(trimmed.to_string())
}
