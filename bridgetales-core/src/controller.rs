use crate::api::{ContinueRequest, GenerateRequest, StoryApi};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::location::{Business, Coordinates};
use crate::profile::{FinishedBook, Timestamp, UserProfile};
use crate::session::{Completion, Direction, Session};
use crate::storage::LibraryStore;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Owns one reader's session together with the API and persistence ports.
///
/// Each method is a single attempt: failures are returned to the caller and
/// leave the session as the state machine defines.
pub struct StoryController<A, S>
where
    A: StoryApi,
    S: LibraryStore,
{
    api: A,
    store: S,
    config: ClientConfig,
    session: Session,
    profile: Option<UserProfile>,
    rng: SmallRng,
}

impl<A, S> StoryController<A, S>
where
    A: StoryApi,
    S: LibraryStore,
{
    /// Build a controller, restoring any saved profile from `store`.
    pub fn new(api: A, store: S, config: ClientConfig, seed: u64) -> Self {
        let profile = store.load_profile().unwrap_or_else(|err| {
            warn!("ignoring unreadable profile: {err}");
            None
        });
        Self {
            api,
            store,
            config,
            session: Session::new(),
            profile,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Start a new story on `theme`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the theme is blank, a request is still
    /// pending, or the server call fails. The session is left empty on failure.
    pub async fn generate(&mut self, theme: &str) -> Result<(), ClientError> {
        let ticket = self.session.begin_generate(theme)?;
        let request = GenerateRequest::new(&ticket, self.profile.as_ref());
        match self.api.generate_story(&request).await {
            Ok(response) => {
                self.session.complete(ticket.id, &response)?;
                info!("started story on {:?}", ticket.theme);
                Ok(())
            }
            Err(err) => {
                self.session.fail(ticket.id)?;
                Err(err.into())
            }
        }
    }

    /// Continue with `choice`. An ending choice also files the finished book
    /// locally and mirrors it to the server; the book is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when there is no story, a request is pending,
    /// or the server call fails. The session is unchanged on failure.
    pub async fn continue_story(
        &mut self,
        choice: &str,
        is_ending: bool,
        now: &Timestamp,
    ) -> Result<Option<FinishedBook>, ClientError> {
        let ticket = self.session.begin_continue(choice, is_ending)?;
        let request = ContinueRequest::new(&ticket, self.profile.as_ref());
        let response = match self.api.continue_story(&request).await {
            Ok(response) => response,
            Err(err) => {
                self.session.fail(ticket.id)?;
                return Err(err.into());
            }
        };
        match self.session.complete(ticket.id, &response)? {
            Completion::Appended => Ok(None),
            Completion::Ended(pages) => {
                let book =
                    FinishedBook::finish(pages, self.profile.as_ref(), &mut self.rng, now);
                archive_book(&self.api, &self.store, &book).await?;
                Ok(Some(book))
            }
        }
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.session.navigate(direction)
    }

    /// Drop the current story; a request still in flight is invalidated.
    pub fn new_story(&mut self) {
        self.session.reset();
    }

    /// Save the profile locally, then on the server.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when local storage fails or the server rejects
    /// the profile. A server failure does not undo the local save.
    pub async fn save_profile(&mut self, profile: UserProfile) -> Result<(), ClientError> {
        let outcome = persist_profile(&self.api, &self.store, &profile).await;
        if !matches!(outcome, Err(ClientError::Storage(_))) {
            self.profile = Some(profile);
        }
        outcome
    }

    /// Forget the profile.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the store refuses the removal.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.store.clear_profile()?;
        self.profile = None;
        Ok(())
    }

    /// Places related to the story so far, searched around `position` or the
    /// configured fallback coordinate.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the location service call fails.
    pub async fn find_nearby(
        &self,
        position: Option<Coordinates>,
    ) -> Result<Vec<Business>, ClientError> {
        let request = self
            .config
            .nearby_request(self.session.story_context(), position);
        Ok(self.api.find_nearby(&request).await?)
    }

    /// Finished books, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the library cannot be read.
    pub fn library(&self) -> Result<Vec<FinishedBook>, ClientError> {
        Ok(newest_first(self.store.load_books()?))
    }
}

/// File a finished book locally, then mirror it to the server. A failed
/// server copy is logged and otherwise ignored.
///
/// # Errors
///
/// Returns a [`ClientError`] when the local library cannot be written.
pub async fn archive_book<A, S>(api: &A, store: &S, book: &FinishedBook) -> Result<(), ClientError>
where
    A: StoryApi + ?Sized,
    S: LibraryStore + ?Sized,
{
    store.append_book(book)?;
    info!("saved finished book {} ({} pages)", book.id, book.page_count());
    if let Err(err) = api.save_book(book).await {
        warn!("book {} kept locally, server copy failed: {err}", book.id);
    }
    Ok(())
}

/// Save a profile locally, then on the server.
///
/// # Errors
///
/// Returns [`ClientError::Storage`] when the local write fails, in which case
/// the server is not contacted, or [`ClientError::Api`] when the server
/// rejects the profile after the local save succeeded.
pub async fn persist_profile<A, S>(
    api: &A,
    store: &S,
    profile: &UserProfile,
) -> Result<(), ClientError>
where
    A: StoryApi + ?Sized,
    S: LibraryStore + ?Sized,
{
    store.save_profile(profile)?;
    api.save_profile(profile).await?;
    Ok(())
}

/// Order a stored library for display.
#[must_use]
pub fn newest_first(mut books: Vec<FinishedBook>) -> Vec<FinishedBook> {
    books.reverse();
    books
}
