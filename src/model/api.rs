use serde::{Deserialize, Serialize};

/// Envelope wrapping every API response body.
///
/// `status` mirrors the HTTP status code, `data` carries the payload (or `null` on
/// errors and empty responses) and `message` is a short human readable summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl ApiResponse<()> {
    /// Response with no payload, used for errors and deletions.
    pub fn empty(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: message.into(),
        }
    }
}
