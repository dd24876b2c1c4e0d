//! Frontend Configuration
//!
//! The API is served from the same origin as the page unless the host page
//! embeds `<script id="app-config" type="application/json">`. Nothing is persisted.

use serde::Deserialize;

/// Used when no browser origin is available
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Origin the `/api/todos` collection is served from
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Parses an embedded JSON config block
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let config: AppConfig = serde_json::from_str(raw)?;
        Ok(Self::new(&config.api_base_url))
    }

    /// Embedded config block, else the page origin, else the default
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let embedded = window
            .document()
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());
        if let Some(raw) = embedded {
            match Self::from_json(&raw) {
                Ok(config) => return config,
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring malformed #{}", CONFIG_ELEMENT_ID)
                }
            }
        }

        let origin = window
            .location()
            .origin()
            .ok()
            .filter(|origin| origin.starts_with("http"));
        match origin {
            Some(origin) => Self::new(&origin),
            None => {
                tracing::warn!("no page origin, using {}", DEFAULT_API_BASE_URL);
                Self::default()
            }
        }
    }
}
