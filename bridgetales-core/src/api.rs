//! HTTP contract with the story server, expressed as a port.
//!
//! The browser build implements [`StoryApi`] on top of `fetch`; tests and the
//! scenario tester plug in scripted implementations.

use crate::error::ApiError;
use crate::location::{Business, Coordinates};
use crate::page::StoryResponse;
use crate::profile::{FinishedBook, UserProfile, Voice};
use crate::session::{ContinueTicket, GenerateTicket};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const GENERATE_PATH: &str = "story/generate";
pub const CONTINUE_PATH: &str = "story/continue";
pub const VOICE_DEMO_PATH: &str = "api/voice-demo";
pub const PROFILE_PATH: &str = "api/profile";
pub const SAVE_BOOK_PATH: &str = "api/save-book";
pub const NEARBY_PATH: &str = "location/story-related";

pub const GENERATE_FAILED: &str = "Failed to generate story";
pub const CONTINUE_FAILED: &str = "Failed to continue story";
pub const NEARBY_FAILED: &str = "Failed to find nearby places";
pub const PROFILE_FAILED: &str = "Failed to save profile";
pub const SAVE_BOOK_FAILED: &str = "Failed to save book";

pub const VOICE_DEMO_TEXT: &str = "Hello! I will be reading your story today.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
}

impl GenerateRequest {
    #[must_use]
    pub fn new(ticket: &GenerateTicket, profile: Option<&UserProfile>) -> Self {
        Self {
            theme: ticket.theme.clone(),
            voice: profile.map(|p| p.voice),
            age: profile.map(|p| p.age),
        }
    }

    /// Query string pairs for `GET /story/generate`; absent values are omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("theme", self.theme.clone())];
        if let Some(voice) = self.voice {
            pairs.push(("voice", voice.id().to_string()));
        }
        if let Some(age) = self.age {
            pairs.push(("age", age.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueRequest {
    pub theme: String,
    pub choice: String,
    pub story_context: String,
    pub is_ending: bool,
    pub voice: Option<Voice>,
    pub age: Option<u8>,
}

impl ContinueRequest {
    #[must_use]
    pub fn new(ticket: &ContinueTicket, profile: Option<&UserProfile>) -> Self {
        Self {
            theme: ticket.theme.clone(),
            choice: ticket.choice.clone(),
            story_context: ticket.story_context.clone(),
            is_ending: ticket.is_ending,
            voice: profile.map(|p| p.voice),
            age: profile.map(|p| p.age),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyRequest {
    pub story_context: String,
    pub latitude: f64,
    pub longitude: f64,
    pub max_results: u32,
}

impl NearbyRequest {
    #[must_use]
    pub fn new(story_context: String, at: Coordinates, max_results: u32) -> Self {
        Self {
            story_context,
            latitude: at.latitude,
            longitude: at.longitude,
            max_results,
        }
    }
}

/// Query string pairs for `GET /api/voice-demo`.
#[must_use]
pub fn voice_demo_query(voice: Voice, text: &str) -> Vec<(&'static str, String)> {
    vec![("voice", voice.id().to_string()), ("text", text.to_string())]
}

#[async_trait(?Send)]
pub trait StoryApi {
    /// `GET /story/generate`
    async fn generate_story(&self, request: &GenerateRequest) -> Result<StoryResponse, ApiError>;

    /// `POST /story/continue`
    async fn continue_story(&self, request: &ContinueRequest) -> Result<StoryResponse, ApiError>;

    /// `POST /location/story-related`
    async fn find_nearby(&self, request: &NearbyRequest) -> Result<Vec<Business>, ApiError>;

    /// `POST /api/profile`
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), ApiError>;

    /// `POST /api/save-book`
    async fn save_book(&self, book: &FinishedBook) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RequestId;

    #[test]
    fn generate_query_omits_missing_profile_fields() {
        let ticket = GenerateTicket {
            id: RequestId(1),
            theme: String::from("space adventure"),
        };
        let request = GenerateRequest::new(&ticket, None);
        assert_eq!(
            request.query_pairs(),
            vec![("theme", String::from("space adventure"))]
        );

        let profile = UserProfile::new("Ada", 8, Voice::Kevin).unwrap();
        let request = GenerateRequest::new(&ticket, Some(&profile));
        assert_eq!(
            request.query_pairs(),
            vec![
                ("theme", String::from("space adventure")),
                ("voice", String::from("Kevin")),
                ("age", String::from("8")),
            ]
        );
    }

    #[test]
    fn continue_body_uses_server_field_names() {
        let ticket = ContinueTicket {
            id: RequestId(2),
            theme: String::from("pirates"),
            choice: String::from("Fight"),
            story_context: String::from("Ahoy."),
            is_ending: false,
        };
        let body = serde_json::to_value(ContinueRequest::new(&ticket, None)).unwrap();
        assert_eq!(body["story_context"], "Ahoy.");
        assert_eq!(body["is_ending"], false);
        assert_eq!(body["choice"], "Fight");
        assert!(body["voice"].is_null());
    }

    #[test]
    fn nearby_body_carries_coordinates() {
        let request = NearbyRequest::new(
            String::from("A picnic"),
            Coordinates {
                latitude: 1.5,
                longitude: -2.5,
            },
            5,
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["latitude"], 1.5);
        assert_eq!(body["longitude"], -2.5);
        assert_eq!(body["max_results"], 5);
    }
}
