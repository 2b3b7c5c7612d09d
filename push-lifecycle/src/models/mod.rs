use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Device OS family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DevicePlatform {
    Android,
    Ios,
}

impl DevicePlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevicePlatform::Android => "android",
            DevicePlatform::Ios => "ios",
        }
    }
}

/// Execution environment reported by the platform layer
///
/// Push tokens are unobtainable in a simulated environment, so registration
/// checks `is_physical` before touching any other platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub platform: DevicePlatform,
    pub is_physical: bool,
}

/// Notification permission status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionStatus::Granted => "granted",
            PermissionStatus::Denied => "denied",
            PermissionStatus::Undetermined => "undetermined",
        }
    }
}

/// Android channel importance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AndroidImportance {
    Min,
    Low,
    Default,
    High,
    Max,
}

impl AndroidImportance {
    pub fn as_str(&self) -> &'static str {
        match self {
            AndroidImportance::Min => "min",
            AndroidImportance::Low => "low",
            AndroidImportance::Default => "default",
            AndroidImportance::High => "high",
            AndroidImportance::Max => "max",
        }
    }
}

/// Android notification channel configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AndroidChannelConfig {
    pub name: String,
    pub importance: AndroidImportance,
    pub vibration_pattern: Vec<u32>,
    pub light_color: String,
}

impl Default for AndroidChannelConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            importance: AndroidImportance::Max,
            vibration_pattern: vec![0, 250, 250, 250],
            light_color: "#FF231F7C".to_string(),
        }
    }
}

/// Foreground presentation policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationBehavior {
    pub show_alert: bool,
    pub play_sound: bool,
    pub set_badge: bool,
}

impl Default for NotificationBehavior {
    fn default() -> Self {
        Self {
            show_alert: true,
            play_sound: true,
            set_badge: true,
        }
    }
}

/// A notification observed while the app could receive it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceivedNotification {
    /// Identifier assigned by the platform notification service
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub data: Option<serde_json::Value>,
    pub received_at: DateTime<Utc>,
}

/// A user interaction with a delivered notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationResponse {
    pub action_id: String,
    pub notification: ReceivedNotification,
}
