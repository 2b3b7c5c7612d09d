use tracing::warn;

/// Sink for user-facing registration failure messages
///
/// The lifecycle reports every registration failure here exactly once; the
/// embedding application decides whether to surface a dialog, a toast, or
/// nothing. Implementations must not block.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Default sink that reports failures through the log
#[derive(Debug, Default)]
pub struct LogAlerts;

impl AlertSink for LogAlerts {
    fn alert(&self, message: &str) {
        warn!("Registration alert: {}", message);
    }
}
