use thiserror::Error;

/// Registration failure taxonomy
///
/// Display strings double as the user-facing alert messages reported through
/// the alert sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Must use physical device for push notifications")]
    DeviceUnsupported,

    #[error("Permission not granted to get push token for push notification!")]
    PermissionDenied,

    #[error("Project ID not found")]
    MissingProjectId,

    #[error("{0}")]
    TokenRetrievalFailed(String),
}

impl From<RegistrationError> for String {
    fn from(err: RegistrationError) -> Self {
        err.to_string()
    }
}
