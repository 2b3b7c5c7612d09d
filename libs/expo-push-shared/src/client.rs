use tracing::debug;

use crate::errors::ExpoPushError;
use crate::models::ExpoPushMessage;

/// Default Expo push delivery endpoint.
pub const EXPO_PUSH_ENDPOINT: &str = "https://exp.host/--/api/v2/push/send";

/// Expo Push Client
///
/// Delivers notifications to registered push tokens through the Expo push
/// endpoint. One `send` call issues exactly one POST, regardless of how many
/// recipient tokens are addressed.
pub struct ExpoPushClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl ExpoPushClient {
    /// Create a new client against the default endpoint
    pub fn new() -> Self {
        Self::with_endpoint(EXPO_PUSH_ENDPOINT.to_string())
    }

    /// Create a new client against a custom endpoint
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            endpoint,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a notification to one or more recipient tokens
    ///
    /// The response body is not inspected on success; a non-success status or
    /// transport failure is surfaced as an `ExpoPushError`.
    pub async fn send(
        &self,
        to: &[String],
        title: &str,
        body: &str,
        data: Option<serde_json::Value>,
    ) -> Result<(), ExpoPushError> {
        let message = ExpoPushMessage::new(to.to_vec(), title.to_string(), body.to_string(), data);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .header("Accept-Encoding", "gzip, deflate")
            .json(&message)
            .send()
            .await
            .map_err(|e| ExpoPushError::RequestError(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                debug!("Push delivery accepted for {} recipient(s)", message.to.len());
                Ok(())
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());

                Err(ExpoPushError::ApiError(status.to_string(), error_text))
            }
        }
    }
}

impl Default for ExpoPushClient {
    fn default() -> Self {
        Self::new()
    }
}
