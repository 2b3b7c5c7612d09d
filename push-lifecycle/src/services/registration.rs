use tracing::{info, warn};

use crate::error::RegistrationError;
use crate::models::{AndroidChannelConfig, DevicePlatform, PermissionStatus};
use crate::services::alerts::AlertSink;
use crate::services::platform::NotificationPlatform;

/// Shared failure helper: surface the message through the sink, then hand the
/// typed error back to the caller.
fn registration_failure(alerts: &dyn AlertSink, err: RegistrationError) -> RegistrationError {
    alerts.alert(&err.to_string());
    err
}

/// Acquire a push token for this device
///
/// Sequence: physical-device precondition, Android channel install,
/// permission acquisition (at most one request), project id resolution,
/// token retrieval. Every failure is reported through `alerts` exactly once
/// before it is returned.
pub async fn register_for_push_notifications(
    platform: &dyn NotificationPlatform,
    alerts: &dyn AlertSink,
    project_id: Option<&str>,
) -> Result<String, RegistrationError> {
    let device = platform.device();
    if !device.is_physical {
        return Err(registration_failure(
            alerts,
            RegistrationError::DeviceUnsupported,
        ));
    }

    if device.platform == DevicePlatform::Android {
        // Channel failures never fail registration.
        if let Err(e) = platform
            .set_channel("default", AndroidChannelConfig::default())
            .await
        {
            warn!("Failed to configure default notification channel: {}", e);
        }
    }

    let mut status = platform.permission_status().await;
    if status != PermissionStatus::Granted {
        status = platform.request_permission().await;
    }
    if status != PermissionStatus::Granted {
        return Err(registration_failure(
            alerts,
            RegistrationError::PermissionDenied,
        ));
    }

    let project_id = match project_id {
        Some(id) => id,
        None => {
            return Err(registration_failure(
                alerts,
                RegistrationError::MissingProjectId,
            ))
        }
    };

    match platform.push_token(project_id).await {
        Ok(token) => {
            info!(platform = device.platform.as_str(), "Obtained push token: {}", token);
            Ok(token)
        }
        Err(e) => Err(registration_failure(
            alerts,
            RegistrationError::TokenRetrievalFailed(e),
        )),
    }
}
