use sea_orm::{DbErr, SqlErr};

/// Checks whether a database error is a unique constraint violation.
///
/// Used where a pre-insert existence check can race with a concurrent insert, so the
/// losing request still gets a typed conflict instead of a 500.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
