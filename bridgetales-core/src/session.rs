//! Paged story session with a single-flight request guard.
//!
//! A session is either empty or holds an ordered list of pages and a cursor
//! into it. Network work is modelled as a ticket: `begin_*` validates the
//! action and hands out a ticket carrying a fresh [`RequestId`], and the
//! caller later reports the outcome with `complete` or `fail`. Outcomes whose
//! id is not the one currently pending are rejected as stale, which covers
//! responses that arrive after the reader started over.

use crate::error::SessionError;
use crate::page::{StoryPage, StoryResponse};
use crate::themes::normalize_theme;
use log::{debug, warn};

/// Separator placed between page texts when the story so far is sent back as
/// context for a continuation.
pub const CONTEXT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Generate,
    Continue { is_ending: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending {
        id: RequestId,
        kind: RequestKind,
        theme: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateTicket {
    pub id: RequestId,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinueTicket {
    pub id: RequestId,
    pub theme: String,
    pub choice: String,
    pub story_context: String,
    pub is_ending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Result of applying a successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Appended,
    /// The story reached its ending; carries every page for the finished book.
    Ended(Vec<StoryPage>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pages: Vec<StoryPage>,
    cursor: usize,
    request: RequestState,
    last_request: u64,
    voice_file: Option<String>,
    finished: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pages(&self) -> &[StoryPage] {
        &self.pages
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&StoryPage> {
        self.pages.get(self.cursor)
    }

    #[must_use]
    pub const fn request(&self) -> &RequestState {
        &self.request
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.request, RequestState::Pending { .. })
    }

    /// Narration for the newest page, as a server-relative path.
    #[must_use]
    pub fn voice_file(&self) -> Option<&str> {
        self.voice_file.as_deref()
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        !self.pages.is_empty() && self.cursor + 1 == self.pages.len()
    }

    /// Whether an ending reply has been applied to this story.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Choices are offered only while the reader is on the newest page of an
    /// unfinished story.
    #[must_use]
    pub fn shows_choices(&self) -> bool {
        !self.finished && self.is_last_page()
    }

    /// All page texts so far, separated by a blank line.
    #[must_use]
    pub fn story_context(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.story.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR)
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request += 1;
        RequestId(self.last_request)
    }

    /// Start a new top-level story.
    ///
    /// Clears the pages immediately so the previous story disappears while the
    /// new one is generated.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyTheme`] for a blank theme and
    /// [`SessionError::Busy`] while another request is pending.
    pub fn begin_generate(&mut self, theme: &str) -> Result<GenerateTicket, SessionError> {
        let theme = normalize_theme(theme).ok_or(SessionError::EmptyTheme)?;
        if self.is_pending() {
            return Err(SessionError::Busy);
        }
        self.pages.clear();
        self.cursor = 0;
        self.voice_file = None;
        self.finished = false;
        let id = self.next_request_id();
        self.request = RequestState::Pending {
            id,
            kind: RequestKind::Generate,
            theme: theme.clone(),
        };
        debug!("generate request {} for theme {theme:?}", id.0);
        Ok(GenerateTicket { id, theme })
    }

    /// Continue the story with the reader's choice.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoStory`] when there is nothing to continue,
    /// [`SessionError::Finished`] once the story has ended and
    /// [`SessionError::Busy`] while another request is pending.
    pub fn begin_continue(
        &mut self,
        choice: &str,
        is_ending: bool,
    ) -> Result<ContinueTicket, SessionError> {
        if self.is_pending() {
            return Err(SessionError::Busy);
        }
        if self.finished {
            return Err(SessionError::Finished);
        }
        let theme = self
            .pages
            .last()
            .map(|page| page.theme.clone())
            .ok_or(SessionError::NoStory)?;
        let story_context = self.story_context();
        let id = self.next_request_id();
        self.request = RequestState::Pending {
            id,
            kind: RequestKind::Continue { is_ending },
            theme: theme.clone(),
        };
        debug!(
            "continue request {} with choice {choice:?} (ending: {is_ending})",
            id.0
        );
        Ok(ContinueTicket {
            id,
            theme,
            choice: choice.trim().to_string(),
            story_context,
            is_ending,
        })
    }

    fn take_pending(&mut self, id: RequestId) -> Result<(RequestKind, String), SessionError> {
        match &self.request {
            RequestState::Pending {
                id: pending,
                kind,
                theme,
            } if *pending == id => {
                let taken = (*kind, theme.clone());
                self.request = RequestState::Idle;
                Ok(taken)
            }
            _ => {
                warn!("discarding stale response for request {}", id.0);
                Err(SessionError::Stale(id.0))
            }
        }
    }

    /// Apply a successful response: append the page and jump to it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Stale`] when `id` is not the pending request;
    /// the session is left untouched.
    pub fn complete(
        &mut self,
        id: RequestId,
        response: &StoryResponse,
    ) -> Result<Completion, SessionError> {
        let (kind, theme) = self.take_pending(id)?;
        self.pages.push(StoryPage::from_response(response, &theme));
        self.cursor = self.pages.len() - 1;
        self.voice_file = response.voice_path().map(str::to_string);
        debug!("request {} appended page {}", id.0, self.cursor + 1);
        match kind {
            RequestKind::Continue { is_ending: true } => {
                self.finished = true;
                Ok(Completion::Ended(self.pages.clone()))
            }
            RequestKind::Generate | RequestKind::Continue { is_ending: false } => {
                Ok(Completion::Appended)
            }
        }
    }

    /// Record a failed request. Pages and cursor are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Stale`] when `id` is not the pending request.
    pub fn fail(&mut self, id: RequestId) -> Result<(), SessionError> {
        self.take_pending(id).map(|_| ())
    }

    /// Drop the story and invalidate any request still in flight.
    pub fn reset(&mut self) {
        self.pages.clear();
        self.cursor = 0;
        self.voice_file = None;
        self.finished = false;
        self.request = RequestState::Idle;
    }

    /// Move the cursor one page, clamped to the available pages.
    /// Returns whether the cursor moved.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let before = self.cursor;
        match direction {
            Direction::Previous => self.cursor = self.cursor.saturating_sub(1),
            Direction::Next => {
                if self.cursor + 1 < self.pages.len() {
                    self.cursor += 1;
                }
            }
        }
        before != self.cursor
    }
}
