use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Persisted acceptance status is not one of the known values.
    ///
    /// Occurs when a row in `recruitment_application` or `competition_registration`
    /// holds a status other than `pending`, `accepted` or `rejected`. Results in a
    /// 500 Internal Server Error with a generic message returned to client.
    #[error("Unknown acceptance status '{value}' stored for {table} {id}")]
    UnknownStatus {
        /// The stored string that failed to parse
        value: String,
        /// The table the row was read from
        table: &'static str,
        /// Primary key of the offending row
        id: i32,
    },

    /// Registration row holds neither or both of user id and team id.
    #[error("Competition registration {0} must reference exactly one of user or team")]
    InvalidRegistrant(i32),
}
