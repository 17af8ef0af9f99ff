//! Side effects driven by state changes: network calls for the pending
//! ticket, filing finished books, the banner timer and status announcements.

use crate::api::HttpStoryApi;
use crate::app::state::{AppState, Outgoing, StoryAction};
use crate::i18n::{t, tr1};
use crate::storage::WebStore;
use bridgetales_core::{
    ContinueRequest, FinishedBook, GenerateRequest, LibraryStore, StoryApi, archive_book,
    newest_first,
};
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Perform the call for each new ticket and report its outcome.
#[hook]
pub fn use_request_runner(state: &AppState) {
    let story = state.story.clone();
    let profile = (*state.profile).clone();
    let api = HttpStoryApi::new((*state.config).clone());
    use_effect_with(state.story.outgoing.clone(), move |outgoing| {
        if let Some(outgoing) = outgoing.clone() {
            spawn_local(async move {
                let id = outgoing.id();
                let result = match &outgoing {
                    Outgoing::Generate(ticket) => {
                        api.generate_story(&GenerateRequest::new(ticket, profile.as_ref()))
                            .await
                    }
                    Outgoing::Continue(ticket) => {
                        api.continue_story(&ContinueRequest::new(ticket, profile.as_ref()))
                            .await
                    }
                };
                story.dispatch(match result {
                    Ok(response) => StoryAction::Completed { id, response },
                    Err(error) => StoryAction::Failed { id, error },
                });
            });
        }
    });
}

/// File each story that reaches its ending, exactly once per ending reply.
#[hook]
pub fn use_book_archiver(state: &AppState) {
    let story = state.story.clone();
    let books = state.books.clone();
    let profile = (*state.profile).clone();
    let api = HttpStoryApi::new((*state.config).clone());
    let ended = state.story.ended.clone();
    use_effect_with(ended.as_ref().map(|e| e.id), move |_| {
        if let Some(ended) = ended {
            let now = crate::dom::now();
            let seed = now.millis ^ js_sys::Math::random().to_bits();
            let mut rng = SmallRng::seed_from_u64(seed);
            let book = FinishedBook::finish(ended.pages, profile.as_ref(), &mut rng, &now);
            spawn_local(async move {
                match archive_book(&api, &WebStore, &book).await {
                    Ok(()) => {
                        crate::a11y::set_status(&t("library.saved"));
                        match WebStore.load_books() {
                            Ok(stored) => books.set(newest_first(stored)),
                            Err(err) => warn!("could not refresh library: {err}"),
                        }
                    }
                    Err(err) => story.dispatch(StoryAction::ShowError(err.banner())),
                }
            });
        }
    });
}

/// Hide the banner after the configured delay.
#[hook]
pub fn use_banner_timeout(state: &AppState) {
    let story = state.story.clone();
    let delay = i32::try_from(state.config.error_dismiss_ms).unwrap_or(i32::MAX);
    use_effect_with(state.story.banner.as_ref().map(|b| b.id), move |id| {
        if let Some(id) = *id {
            spawn_local(async move {
                if crate::dom::sleep_ms(delay).await.is_ok() {
                    story.dispatch(StoryAction::DismissError(id));
                }
            });
        }
    });
}

/// Announce each newly appended page to screen readers.
#[hook]
pub fn use_page_announcer(state: &AppState) {
    use_effect_with(state.story.session.len(), |len| {
        if *len > 0 {
            crate::a11y::set_status(&tr1("story.ready", "page", &len.to_string()));
        }
    });
}
