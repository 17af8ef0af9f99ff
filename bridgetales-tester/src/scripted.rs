//! In-process stand-in for the story server.

use async_trait::async_trait;
use bridgetales_core::{
    ApiError, Business, ContinueRequest, FinishedBook, GenerateRequest, NearbyRequest, StoryApi,
    StoryResponse, UserProfile,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Everything the client sent, in order.
#[derive(Debug, Default)]
pub struct Calls {
    pub generate: Vec<GenerateRequest>,
    pub continue_: Vec<ContinueRequest>,
    pub nearby: Vec<NearbyRequest>,
    pub profiles: Vec<UserProfile>,
    pub books: Vec<FinishedBook>,
}

/// Replies are queued per test and consumed by generate/continue in order.
/// An empty queue answers with a transport error.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    replies: Rc<RefCell<VecDeque<Result<StoryResponse, ApiError>>>>,
    calls: Rc<RefCell<Calls>>,
    places: Rc<RefCell<Vec<Business>>>,
    reject_books: bool,
}

impl ScriptedApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A server whose book mirror is down.
    #[must_use]
    pub fn rejecting_books() -> Self {
        Self {
            reject_books: true,
            ..Self::default()
        }
    }

    pub fn reply(&self, reply: Result<StoryResponse, ApiError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn reply_page(&self, theme: &str, story: &str, choices: &[&str]) {
        self.reply(Ok(page(theme, story, choices)));
    }

    pub fn reply_status(&self, status: u16, detail: &str) {
        self.reply(Err(ApiError::Status {
            status,
            detail: detail.to_string(),
        }));
    }

    pub fn set_places(&self, places: Vec<Business>) {
        *self.places.borrow_mut() = places;
    }

    pub fn calls(&self) -> std::cell::Ref<'_, Calls> {
        self.calls.borrow()
    }

    fn next_reply(&self) -> Result<StoryResponse, ApiError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport(String::from("no scripted reply"))))
    }
}

/// A server page with one illustration.
#[must_use]
pub fn page(theme: &str, story: &str, choices: &[&str]) -> StoryResponse {
    StoryResponse {
        story: story.to_string(),
        images: vec![format!("https://img.example/{theme}.png")],
        choices: choices.iter().map(|c| (*c).to_string()).collect(),
        theme: theme.to_string(),
        ..StoryResponse::default()
    }
}

#[async_trait(?Send)]
impl StoryApi for ScriptedApi {
    async fn generate_story(&self, request: &GenerateRequest) -> Result<StoryResponse, ApiError> {
        self.calls.borrow_mut().generate.push(request.clone());
        self.next_reply()
    }

    async fn continue_story(&self, request: &ContinueRequest) -> Result<StoryResponse, ApiError> {
        self.calls.borrow_mut().continue_.push(request.clone());
        self.next_reply()
    }

    async fn find_nearby(&self, request: &NearbyRequest) -> Result<Vec<Business>, ApiError> {
        self.calls.borrow_mut().nearby.push(request.clone());
        let places = self.places.borrow();
        let limit = usize::try_from(request.max_results).unwrap_or(usize::MAX);
        Ok(places.iter().take(limit).cloned().collect())
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), ApiError> {
        self.calls.borrow_mut().profiles.push(profile.clone());
        Ok(())
    }

    async fn save_book(&self, book: &FinishedBook) -> Result<(), ApiError> {
        self.calls.borrow_mut().books.push(book.clone());
        if self.reject_books {
            return Err(ApiError::Transport(String::from("offline")));
        }
        Ok(())
    }
}
