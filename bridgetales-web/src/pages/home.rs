use crate::app::state::{NearbyState, StoryState};
use crate::components::audio_player::AudioPlayer;
use crate::components::choice_list::ChoiceList;
use crate::components::nearby_panel::NearbyPanel;
use crate::components::page_nav::PageNav;
use crate::components::story_view::StoryView;
use crate::components::theme_form::ThemeForm;
use crate::i18n::t;
use bridgetales_core::{ChoiceButton, Direction, audio_url, choice_buttons, page_navigation};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub story: StoryState,
    pub nearby: NearbyState,
    pub api_base: AttrValue,
    pub on_generate: Callback<String>,
    pub on_choose: Callback<ChoiceButton>,
    pub on_navigate: Callback<Direction>,
    pub on_new_story: Callback<()>,
    pub on_share: Callback<()>,
    pub on_find_nearby: Callback<()>,
    pub on_close_nearby: Callback<()>,
}

/// Theme entry plus the story reader once a story exists.
#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let session = &p.story.session;
    let busy = p.story.is_busy();

    let Some(page) = session.current().cloned() else {
        return html! {
            <div class="home">
                <ThemeForm busy={busy} on_generate={p.on_generate.clone()} />
                if busy {
                    <p class="loading muted" aria-live="polite">{ t("theme.loading") }</p>
                }
            </div>
        };
    };

    let audio = session.voice_file().map(|path| {
        let src = audio_url(&p.api_base, path);
        let key = format!("{}-{src}", p.story.story_epoch);
        html! { <AudioPlayer key={key} src={AttrValue::from(src)} /> }
    });
    let pager = page_navigation(session).map(|nav| {
        html! { <PageNav {nav} on_navigate={p.on_navigate.clone()} /> }
    });
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="home">
            <div class="story-toolbar">
                <button id="new-story" disabled={busy} onclick={emit(&p.on_new_story)}>{ t("story.new") }</button>
                <button id="share-story" onclick={emit(&p.on_share)}>{ t("story.share") }</button>
                <button
                    id="find-nearby"
                    disabled={p.nearby == NearbyState::Loading}
                    onclick={emit(&p.on_find_nearby)}
                >
                    { t("story.nearby") }
                </button>
            </div>
            <StoryView page={page} on_overlay={p.on_find_nearby.clone()} />
            { for audio }
            { for pager }
            <ChoiceList
                buttons={choice_buttons(session)}
                busy={busy}
                on_choose={p.on_choose.clone()}
            />
            <NearbyPanel state={p.nearby.clone()} on_close={p.on_close_nearby.clone()} />
        </div>
    }
}
