use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    AndroidChannelConfig, DeviceProfile, NotificationBehavior, NotificationResponse,
    PermissionStatus, ReceivedNotification,
};

/// Callback invoked for each notification received while the app can observe it
pub type ReceivedCallback = Box<dyn Fn(ReceivedNotification) + Send + Sync>;

/// Callback invoked when the user interacts with a delivered notification
pub type ResponseCallback = Box<dyn Fn(NotificationResponse) + Send + Sync>;

/// Opaque handle for an installed notification subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(Uuid);

impl SubscriptionHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl Default for SubscriptionHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform notification service seam
///
/// Implement this trait to bind the registration lifecycle to a concrete
/// device platform. Permission queries are infallible by contract: an adapter
/// that cannot query folds the failure into `Denied`.
#[async_trait]
pub trait NotificationPlatform: Send + Sync {
    /// Profile of the current execution environment
    fn device(&self) -> DeviceProfile;

    /// Install the foreground presentation policy
    fn set_notification_behavior(&self, behavior: NotificationBehavior);

    /// Current notification permission status
    async fn permission_status(&self) -> PermissionStatus;

    /// Prompt the user for notification permission
    async fn request_permission(&self) -> PermissionStatus;

    /// Request a push token scoped to the given project identifier
    async fn push_token(&self, project_id: &str) -> Result<String, String>;

    /// Create or overwrite a notification channel (Android only)
    async fn set_channel(
        &self,
        channel_id: &str,
        config: AndroidChannelConfig,
    ) -> Result<(), String>;

    /// Subscribe to notifications received in the foreground
    fn subscribe_received(&self, callback: ReceivedCallback) -> SubscriptionHandle;

    /// Subscribe to user interactions with delivered notifications
    fn subscribe_responded(&self, callback: ResponseCallback) -> SubscriptionHandle;

    /// Remove a previously installed subscription
    fn unsubscribe(&self, handle: SubscriptionHandle);
}
