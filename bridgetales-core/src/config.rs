use crate::api::NearbyRequest;
use crate::location::{Coordinates, DEFAULT_COORDINATES};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ERROR_DISMISS_MS: u32 = 5_000;
pub const DEFAULT_NEARBY_MAX_RESULTS: u32 = 5;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_error_dismiss_ms() -> u32 {
    DEFAULT_ERROR_DISMISS_MS
}

const fn default_nearby_max_results() -> u32 {
    DEFAULT_NEARBY_MAX_RESULTS
}

const fn default_coordinates() -> Coordinates {
    DEFAULT_COORDINATES
}

fn default_log_level() -> String {
    String::from("info")
}

/// Client settings. Every field has a default so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// How long an error banner stays visible.
    #[serde(default = "default_error_dismiss_ms")]
    pub error_dismiss_ms: u32,
    #[serde(default = "default_nearby_max_results")]
    pub nearby_max_results: u32,
    #[serde(default = "default_coordinates")]
    pub default_coordinates: Coordinates,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            error_dismiss_ms: DEFAULT_ERROR_DISMISS_MS,
            nearby_max_results: DEFAULT_NEARBY_MAX_RESULTS,
            default_coordinates: DEFAULT_COORDINATES,
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Override the API base URL when `base` is non-blank.
    #[must_use]
    pub fn with_api_base(mut self, base: Option<&str>) -> Self {
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base_url = base.trim_end_matches('/').to_string();
        }
        self
    }

    /// API URL for a path relative to the base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Nearby search around `position`, or around the configured fallback
    /// when the browser gave no position.
    #[must_use]
    pub fn nearby_request(
        &self,
        story_context: String,
        position: Option<Coordinates>,
    ) -> NearbyRequest {
        NearbyRequest::new(
            story_context,
            position.unwrap_or(self.default_coordinates),
            self.nearby_max_results,
        )
    }

    #[must_use]
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
