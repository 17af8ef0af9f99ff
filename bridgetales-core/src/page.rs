use serde::{Deserialize, Serialize};

/// Payload returned by both `/story/generate` and `/story/continue`.
///
/// Everything except the story text and theme is optional on the wire and
/// falls back to an empty default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryResponse {
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub voice_file: Option<String>,
}

impl StoryResponse {
    /// Server-relative narration path, if the server produced one.
    #[must_use]
    pub fn voice_path(&self) -> Option<&str> {
        self.voice_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

/// One generated page of the story. Pages are never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryPage {
    pub story: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub choices: Vec<String>,
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl StoryPage {
    /// Build a page from a response, falling back to `requested_theme` when
    /// the server omitted the theme.
    #[must_use]
    pub fn from_response(response: &StoryResponse, requested_theme: &str) -> Self {
        let theme = if response.theme.trim().is_empty() {
            requested_theme.to_string()
        } else {
            response.theme.clone()
        };
        Self {
            story: response.story.clone(),
            images: response
                .images
                .iter()
                .filter(|url| !url.trim().is_empty())
                .cloned()
                .collect(),
            choices: response
                .choices
                .iter()
                .map(|choice| choice.trim())
                .filter(|choice| !choice.is_empty())
                .map(str::to_string)
                .collect(),
            theme,
            location: response
                .location
                .as_ref()
                .filter(|loc| !loc.trim().is_empty())
                .cloned(),
        }
    }

    /// First illustration, which is the only one the reader shows.
    #[must_use]
    pub fn illustration(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
