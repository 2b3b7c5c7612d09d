use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub project: ProjectConfig,
    pub push: PushConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project identifier the push token is scoped to. Registration fails
    /// with `MissingProjectId` when absent.
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    pub endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            project: ProjectConfig {
                project_id: std::env::var("EXPO_PROJECT_ID")
                    .ok()
                    .or_else(|| std::env::var("EAS_PROJECT_ID").ok()),
            },
            push: PushConfig {
                endpoint: std::env::var("EXPO_PUSH_ENDPOINT")
                    .unwrap_or_else(|_| expo_push_shared::EXPO_PUSH_ENDPOINT.to_string()),
            },
        }
    }
}
