//! Application state: the story reducer plus the smaller UI handles.
//!
//! The reducer owns the [`Session`]. Starting a request records the ticket in
//! `outgoing`; an effect performs the call and dispatches the outcome back
//! with the ticket's id, so a reply for a request the reader has since
//! abandoned is rejected by the session and leaves the state untouched.

use bridgetales_core::{
    ApiError, Business, ClientConfig, ClientError, Completion, ContinueTicket, Direction,
    FinishedBook, GenerateTicket, RequestId, Session, SessionError, StoryPage, StoryResponse,
    UserProfile,
};
use log::debug;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Generate(GenerateTicket),
    Continue(ContinueTicket),
}

impl Outgoing {
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::Generate(ticket) => ticket.id,
            Self::Continue(ticket) => ticket.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub message: String,
}

/// Pages of a story that just reached its ending, waiting to be filed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndedStory {
    pub id: RequestId,
    pub pages: Vec<StoryPage>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoryState {
    pub session: Session,
    pub outgoing: Option<Outgoing>,
    pub ended: Option<EndedStory>,
    pub banner: Option<Banner>,
    banner_seq: u64,
    /// Changes whenever a story starts or is dropped; keys the narration player.
    pub story_epoch: u64,
}

pub enum StoryAction {
    Generate(String),
    Continue { choice: String, is_ending: bool },
    Completed { id: RequestId, response: StoryResponse },
    Failed { id: RequestId, error: ApiError },
    Navigate(Direction),
    NewStory,
    ShowError(String),
    DismissError(u64),
}

impl StoryState {
    fn raise(&mut self, message: String) {
        self.banner_seq += 1;
        self.banner = Some(Banner {
            id: self.banner_seq,
            message,
        });
    }

    fn refuse(&mut self, err: SessionError) {
        if matches!(err, SessionError::Busy | SessionError::Finished) {
            debug!("ignoring story action: {err}");
            return;
        }
        self.raise(ClientError::from(err).banner());
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.session.is_pending()
    }
}

impl Reducible for StoryState {
    type Action = StoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StoryAction::Generate(theme) => match next.session.begin_generate(&theme) {
                Ok(ticket) => {
                    next.outgoing = Some(Outgoing::Generate(ticket));
                    next.ended = None;
                    next.banner = None;
                    next.story_epoch += 1;
                }
                Err(err) => next.refuse(err),
            },
            StoryAction::Continue { choice, is_ending } => {
                match next.session.begin_continue(&choice, is_ending) {
                    Ok(ticket) => {
                        next.outgoing = Some(Outgoing::Continue(ticket));
                        next.banner = None;
                    }
                    Err(err) => next.refuse(err),
                }
            }
            StoryAction::Completed { id, response } => match next.session.complete(id, &response) {
                Ok(Completion::Appended) => next.outgoing = None,
                Ok(Completion::Ended(pages)) => {
                    next.outgoing = None;
                    next.ended = Some(EndedStory { id, pages });
                }
                Err(_) => return self,
            },
            StoryAction::Failed { id, error } => {
                if next.session.fail(id).is_err() {
                    return self;
                }
                next.outgoing = None;
                next.raise(ClientError::from(error).banner());
            }
            StoryAction::Navigate(direction) => {
                if !next.session.navigate(direction) {
                    return self;
                }
            }
            StoryAction::NewStory => {
                next.session.reset();
                next.outgoing = None;
                next.ended = None;
                next.story_epoch += 1;
            }
            StoryAction::ShowError(message) => next.raise(message),
            StoryAction::DismissError(id) => {
                if next.banner.as_ref().is_none_or(|banner| banner.id != id) {
                    return self;
                }
                next.banner = None;
            }
        }
        Rc::new(next)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NearbyState {
    #[default]
    Closed,
    Loading,
    Loaded(Vec<Business>),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Rc<ClientConfig>,
    pub story: UseReducerHandle<StoryState>,
    pub profile: UseStateHandle<Option<UserProfile>>,
    pub books: UseStateHandle<Vec<FinishedBook>>,
    pub nearby: UseStateHandle<NearbyState>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let config = use_memo((), |()| crate::paths::client_config());
    AppState {
        config,
        story: use_reducer(StoryState::default),
        profile: use_state(crate::storage::initial_profile),
        books: use_state(crate::storage::initial_books),
        nearby: use_state(NearbyState::default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(story: &str, choices: &[&str]) -> StoryResponse {
        StoryResponse {
            story: story.to_string(),
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            theme: String::from("pirates"),
            ..StoryResponse::default()
        }
    }

    fn reduce(state: Rc<StoryState>, action: StoryAction) -> Rc<StoryState> {
        state.reduce(action)
    }

    fn pending_id(state: &StoryState) -> RequestId {
        state.outgoing.as_ref().map(Outgoing::id).unwrap()
    }

    #[test]
    fn generate_records_ticket_then_appends_page() {
        let state = reduce(Rc::default(), StoryAction::Generate(String::from("pirates")));
        assert!(state.is_busy());
        assert!(matches!(state.outgoing, Some(Outgoing::Generate(ref t)) if t.theme == "pirates"));

        let id = pending_id(&state);
        let state = reduce(
            state,
            StoryAction::Completed {
                id,
                response: response("Ahoy.", &["Fight", "Flee"]),
            },
        );
        assert!(!state.is_busy());
        assert_eq!(state.outgoing, None);
        assert_eq!(state.session.len(), 1);
    }

    #[test]
    fn blank_theme_raises_banner_without_request() {
        let state = reduce(Rc::default(), StoryAction::Generate(String::from("  ")));
        assert_eq!(state.outgoing, None);
        assert_eq!(
            state.banner.as_ref().map(|b| b.message.as_str()),
            Some("Please enter a theme for your story")
        );
    }

    #[test]
    fn failure_shows_banner_and_keeps_pages() {
        let state = reduce(Rc::default(), StoryAction::Generate(String::from("pirates")));
        let id = pending_id(&state);
        let state = reduce(
            state,
            StoryAction::Completed {
                id,
                response: response("Ahoy.", &["Fight"]),
            },
        );
        let state = reduce(
            state,
            StoryAction::Continue {
                choice: String::from("Fight"),
                is_ending: false,
            },
        );
        let id = pending_id(&state);
        let state = reduce(
            state,
            StoryAction::Failed {
                id,
                error: ApiError::Transport(String::from("Failed to fetch")),
            },
        );
        assert_eq!(state.session.len(), 1);
        assert_eq!(
            state.banner.as_ref().map(|b| b.message.as_str()),
            Some("Error: Failed to fetch. Please try again.")
        );
    }

    #[test]
    fn reply_after_new_story_is_ignored() {
        let state = reduce(Rc::default(), StoryAction::Generate(String::from("pirates")));
        let id = pending_id(&state);
        let state = reduce(state, StoryAction::NewStory);
        let after = reduce(
            Rc::clone(&state),
            StoryAction::Completed {
                id,
                response: response("Late.", &[]),
            },
        );
        assert!(Rc::ptr_eq(&state, &after));
        assert!(after.session.is_empty());
    }

    #[test]
    fn second_request_while_pending_is_ignored() {
        let state = reduce(Rc::default(), StoryAction::Generate(String::from("pirates")));
        let first = pending_id(&state);
        let state = reduce(state, StoryAction::Generate(String::from("dragons")));
        assert_eq!(pending_id(&state), first);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn ending_reply_queues_book() {
        let state = reduce(Rc::default(), StoryAction::Generate(String::from("pirates")));
        let id = pending_id(&state);
        let state = reduce(
            state,
            StoryAction::Completed {
                id,
                response: response("Ahoy.", &["Fight"]),
            },
        );
        let state = reduce(
            state,
            StoryAction::Continue {
                choice: String::from("Bring the story to a happy ending"),
                is_ending: true,
            },
        );
        let id = pending_id(&state);
        let state = reduce(
            state,
            StoryAction::Completed {
                id,
                response: response("Home again.", &[]),
            },
        );
        let ended = state.ended.as_ref().unwrap();
        assert_eq!(ended.id, id);
        assert_eq!(ended.pages.len(), 2);

        let again = reduce(
            Rc::clone(&state),
            StoryAction::Continue {
                choice: String::from("Bring the story to a happy ending"),
                is_ending: true,
            },
        );
        assert_eq!(again.outgoing, None);
        assert_eq!(again.banner, None);
        assert_eq!(again.ended.as_ref().map(|e| e.id), Some(id));
    }

    #[test]
    fn dismiss_only_clears_matching_banner() {
        let state = reduce(Rc::default(), StoryAction::ShowError(String::from("first")));
        let stale = state.banner.as_ref().unwrap().id;
        let state = reduce(state, StoryAction::ShowError(String::from("second")));
        let state = reduce(state, StoryAction::DismissError(stale));
        assert_eq!(state.banner.as_ref().map(|b| b.message.as_str()), Some("second"));
        let current = state.banner.as_ref().unwrap().id;
        let state = reduce(state, StoryAction::DismissError(current));
        assert_eq!(state.banner, None);
    }
}
