use crate::api::HttpStoryApi;
use crate::app::state::{AppState, NearbyState, StoryAction};
use crate::components::profile_form::ProfileDraft;
use crate::i18n::t;
use crate::storage::WebStore;
use bridgetales_core::api::VOICE_DEMO_TEXT;
use bridgetales_core::{
    ApiError, ChoiceButton, ClientError, Direction, LibraryStore, StoryApi, Voice, banner_message,
    persist_profile, share_latest,
};
use log::{debug, warn};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub generate: Callback<String>,
    pub choose: Callback<ChoiceButton>,
    pub navigate: Callback<Direction>,
    pub new_story: Callback<()>,
    pub dismiss_error: Callback<u64>,
    pub share: Callback<()>,
    pub find_nearby: Callback<()>,
    pub close_nearby: Callback<()>,
    pub save_profile: Callback<ProfileDraft>,
    pub logout: Callback<()>,
    pub voice_demo: Callback<Voice>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            generate: build_generate(state),
            choose: build_choose(state),
            navigate: build_navigate(state),
            new_story: build_new_story(state),
            dismiss_error: build_dismiss_error(state),
            share: build_share(state),
            find_nearby: build_find_nearby(state),
            close_nearby: build_close_nearby(state),
            save_profile: build_save_profile(state),
            logout: build_logout(state),
            voice_demo: build_voice_demo(state),
        }
    }
}

fn build_generate(state: &AppState) -> Callback<String> {
    let story = state.story.clone();
    let nearby = state.nearby.clone();
    Callback::from(move |theme: String| {
        nearby.set(NearbyState::Closed);
        story.dispatch(StoryAction::Generate(theme));
    })
}

fn build_choose(state: &AppState) -> Callback<ChoiceButton> {
    let story = state.story.clone();
    Callback::from(move |button: ChoiceButton| {
        story.dispatch(StoryAction::Continue {
            choice: button.label,
            is_ending: button.is_ending,
        });
    })
}

fn build_navigate(state: &AppState) -> Callback<Direction> {
    let story = state.story.clone();
    Callback::from(move |direction| story.dispatch(StoryAction::Navigate(direction)))
}

fn build_new_story(state: &AppState) -> Callback<()> {
    let story = state.story.clone();
    let nearby = state.nearby.clone();
    Callback::from(move |()| {
        nearby.set(NearbyState::Closed);
        story.dispatch(StoryAction::NewStory);
    })
}

fn build_dismiss_error(state: &AppState) -> Callback<u64> {
    let story = state.story.clone();
    Callback::from(move |id| story.dispatch(StoryAction::DismissError(id)))
}

fn build_share(state: &AppState) -> Callback<()> {
    let story = state.story.clone();
    Callback::from(move |()| {
        let Some(content) = share_latest(&story.session) else {
            return;
        };
        let story = story.clone();
        spawn_local(async move {
            match crate::share::share(&content).await {
                Ok(outcome) => crate::a11y::set_status(&t(outcome.status_key())),
                Err(crate::share::ShareError::Unavailable) => {
                    story.dispatch(StoryAction::ShowError(t("share.unavailable")));
                }
                Err(err) => debug!("share dismissed: {err}"),
            }
        });
    })
}

fn build_find_nearby(state: &AppState) -> Callback<()> {
    let story = state.story.clone();
    let nearby = state.nearby.clone();
    let config = state.config.clone();
    Callback::from(move |()| {
        if *nearby == NearbyState::Loading {
            return;
        }
        nearby.set(NearbyState::Loading);
        let context = story.session.story_context();
        let story = story.clone();
        let nearby = nearby.clone();
        let config = config.clone();
        spawn_local(async move {
            let position = crate::geo::current_position().await;
            let request = config.nearby_request(context, position);
            let api = HttpStoryApi::new((*config).clone());
            match api.find_nearby(&request).await {
                Ok(places) => nearby.set(NearbyState::Loaded(places)),
                Err(err) => {
                    nearby.set(NearbyState::Closed);
                    story.dispatch(StoryAction::ShowError(ClientError::from(err).banner()));
                }
            }
        });
    })
}

fn build_close_nearby(state: &AppState) -> Callback<()> {
    let nearby = state.nearby.clone();
    Callback::from(move |()| nearby.set(NearbyState::Closed))
}

fn build_save_profile(state: &AppState) -> Callback<ProfileDraft> {
    let story = state.story.clone();
    let profile_handle = state.profile.clone();
    let config = state.config.clone();
    Callback::from(move |draft: ProfileDraft| {
        let profile = match draft.validate() {
            Ok(profile) => profile,
            Err(err) => {
                story.dispatch(StoryAction::ShowError(ClientError::from(err).banner()));
                return;
            }
        };
        let story = story.clone();
        let profile_handle = profile_handle.clone();
        let api = HttpStoryApi::new((*config).clone());
        spawn_local(async move {
            let outcome = persist_profile(&api, &WebStore, &profile).await;
            if !matches!(outcome, Err(ClientError::Storage(_))) {
                profile_handle.set(Some(profile));
            }
            match outcome {
                Ok(()) => crate::a11y::set_status(&t("profile.saved")),
                Err(err) => story.dispatch(StoryAction::ShowError(err.banner())),
            }
        });
    })
}

fn build_logout(state: &AppState) -> Callback<()> {
    let story = state.story.clone();
    let profile = state.profile.clone();
    Callback::from(move |()| match WebStore.clear_profile() {
        Ok(()) => {
            profile.set(None);
            crate::a11y::set_status(&t("profile.logged_out"));
        }
        Err(err) => story.dispatch(StoryAction::ShowError(ClientError::from(err).banner())),
    })
}

fn build_voice_demo(state: &AppState) -> Callback<Voice> {
    let story = state.story.clone();
    let api = HttpStoryApi::new((*state.config).clone());
    Callback::from(move |voice: Voice| {
        let url = match api.voice_demo_url(voice, VOICE_DEMO_TEXT) {
            Ok(url) => url,
            Err(err) => {
                story.dispatch(StoryAction::ShowError(ClientError::from(err).banner()));
                return;
            }
        };
        let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(&url) else {
            warn!("audio element unavailable for voice demo");
            return;
        };
        let story = story.clone();
        spawn_local(async move {
            let played = match audio.play() {
                Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                Err(err) => Err(err),
            };
            if let Err(err) = played {
                let err = ApiError::Transport(crate::dom::js_error_message(&err));
                warn!("voice demo failed: {err}");
                story.dispatch(StoryAction::ShowError(banner_message(&err)));
            }
        });
    })
}
