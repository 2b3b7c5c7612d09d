use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use expo_push_shared::ExpoPushClient;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::RegistrationError;
use crate::models::{NotificationBehavior, ReceivedNotification};
use crate::services::alerts::AlertSink;
use crate::services::platform::{NotificationPlatform, SubscriptionHandle};
use crate::services::registration::register_for_push_notifications;

/// Process-scoped initialization guard
///
/// Transitions `false → true` exactly once and is never reset.
#[derive(Debug, Default)]
pub struct RegistrationGuard {
    initialized: AtomicBool,
}

impl RegistrationGuard {
    pub fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Claim the guard. Returns true only for the call that performed the
    /// `false → true` transition.
    pub fn mark_initialized(&self) -> bool {
        !self.initialized.swap(true, Ordering::SeqCst)
    }
}

#[derive(Default)]
struct Subscriptions {
    received: Option<SubscriptionHandle>,
    responded: Option<SubscriptionHandle>,
}

/// Push registration lifecycle manager
///
/// Construct once at application start; call `attach` when the owning screen
/// mounts and `detach` when it unmounts. Registration and subscription
/// installation both happen at most once per process lifetime; handle release
/// on `detach` is unconditional.
pub struct PushLifecycle {
    platform: Arc<dyn NotificationPlatform>,
    alerts: Arc<dyn AlertSink>,
    config: Config,
    sender: ExpoPushClient,
    guard: RegistrationGuard,
    token: Mutex<Option<Result<String, RegistrationError>>>,
    log: Arc<Mutex<Vec<ReceivedNotification>>>,
    subscriptions: Mutex<Subscriptions>,
}

impl PushLifecycle {
    pub fn new(
        platform: Arc<dyn NotificationPlatform>,
        alerts: Arc<dyn AlertSink>,
        config: Config,
    ) -> Self {
        platform.set_notification_behavior(NotificationBehavior::default());
        let sender = ExpoPushClient::with_endpoint(config.push.endpoint.clone());

        Self {
            platform,
            alerts,
            config,
            sender,
            guard: RegistrationGuard::new(),
            token: Mutex::new(None),
            log: Arc::new(Mutex::new(Vec::new())),
            subscriptions: Mutex::new(Subscriptions::default()),
        }
    }

    /// Mount-time orchestration
    ///
    /// First call per process: registers for push notifications, stores the
    /// tagged outcome, then installs the received/responded subscriptions.
    /// Every later call is a no-op, even after `detach`.
    pub async fn attach(&self) {
        if !self.guard.mark_initialized() {
            return;
        }

        let outcome = register_for_push_notifications(
            self.platform.as_ref(),
            self.alerts.as_ref(),
            self.config.project.project_id.as_deref(),
        )
        .await;
        *self.token.lock().expect("Token slot lock poisoned") = Some(outcome);

        let log = Arc::clone(&self.log);
        let received = self.platform.subscribe_received(Box::new(move |notification| {
            log.lock()
                .expect("Notification log lock poisoned")
                .insert(0, notification);
        }));
        let responded = self.platform.subscribe_responded(Box::new(|response| {
            info!(
                "Notification response: action {} on {}",
                response.action_id, response.notification.id
            );
        }));

        let mut subscriptions = self
            .subscriptions
            .lock()
            .expect("Subscription state lock poisoned");
        subscriptions.received = Some(received);
        subscriptions.responded = Some(responded);
    }

    /// Unmount-time teardown: release both handles if present, regardless of
    /// the guard. Idempotent.
    pub fn detach(&self) {
        let mut subscriptions = self
            .subscriptions
            .lock()
            .expect("Subscription state lock poisoned");
        if let Some(handle) = subscriptions.received.take() {
            self.platform.unsubscribe(handle);
        }
        if let Some(handle) = subscriptions.responded.take() {
            self.platform.unsubscribe(handle);
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.guard.is_initialized()
    }

    /// Tagged registration outcome; `None` before the first attach settles
    pub fn push_token(&self) -> Option<Result<String, RegistrationError>> {
        self.token.lock().expect("Token slot lock poisoned").clone()
    }

    /// Snapshot of the notification log, newest first
    pub fn notifications(&self) -> Vec<ReceivedNotification> {
        self.log
            .lock()
            .expect("Notification log lock poisoned")
            .clone()
    }

    pub fn notification_count(&self) -> usize {
        self.log
            .lock()
            .expect("Notification log lock poisoned")
            .len()
    }

    /// Send a notification to the given recipient tokens
    ///
    /// Delivery failures are observed and logged, never propagated: the call
    /// settles regardless of network outcome.
    pub async fn send_push_notification(
        &self,
        to: &[String],
        title: &str,
        body: &str,
        data: Option<serde_json::Value>,
    ) {
        if let Err(e) = self.sender.send(to, title, body, data).await {
            warn!("Push delivery failed: {}", e);
        }
    }
}
