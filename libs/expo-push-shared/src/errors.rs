use thiserror::Error;

/// Expo Push Client Error Types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpoPushError {
    #[error("Push send request failed: {0}")]
    RequestError(String),

    #[error("Push API error: {0} - {1}")]
    ApiError(String, String),
}

impl From<ExpoPushError> for String {
    fn from(err: ExpoPushError) -> Self {
        err.to_string()
    }
}
