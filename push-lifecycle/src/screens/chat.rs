use std::collections::HashMap;

/// Route parameters supplied by the navigation layer, consumed read-only.
#[derive(Debug, Clone, Default)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for RouteParams {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Render the chat screen heading for a route-supplied identifier
///
/// A missing identifier renders the literal `undefined` placeholder. That is
/// an accepted degenerate case, not an error path.
pub fn chat_screen_text(id: Option<&str>) -> String {
    format!("Chat ID: ${}", id.unwrap_or("undefined"))
}

/// Render the chat screen from the full route parameter set
pub fn chat_screen(params: &RouteParams) -> String {
    chat_screen_text(params.get("id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_supplied_identifier() {
        let rendered = chat_screen_text(Some("room-42"));
        assert!(rendered.contains("room-42"));
        assert_eq!(rendered, "Chat ID: $room-42");
    }

    #[test]
    fn test_missing_identifier_renders_placeholder() {
        assert_eq!(chat_screen_text(None), "Chat ID: $undefined");
    }

    #[test]
    fn test_extracts_id_from_route_params() {
        let mut params = RouteParams::new();
        params.insert("id", "abc");
        assert_eq!(chat_screen(&params), "Chat ID: $abc");

        let empty = RouteParams::new();
        assert_eq!(chat_screen(&empty), "Chat ID: $undefined");
    }

    #[test]
    fn test_collects_route_params_from_pairs() {
        let params: RouteParams = vec![("id".to_string(), "42".to_string())]
            .into_iter()
            .collect();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("missing"), None);
    }
}
