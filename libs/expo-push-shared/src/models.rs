use serde::Serialize;

/// Expo Push Message Request
///
/// Wire shape expected by the push endpoint. `sound` is always the default
/// indicator; `data` is omitted entirely when no payload is attached.
#[derive(Debug, Clone, Serialize)]
pub struct ExpoPushMessage {
    pub to: Vec<String>,
    pub sound: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ExpoPushMessage {
    pub fn new(
        to: Vec<String>,
        title: String,
        body: String,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            to,
            sound: "default".to_string(),
            title,
            body,
            data,
        }
    }
}
