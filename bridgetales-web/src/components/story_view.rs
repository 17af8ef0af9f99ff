use crate::components::overlays::Overlays;
use crate::i18n::tr1;
use bridgetales_core::{StoryPage, overlays_for};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub page: StoryPage,
    pub on_overlay: Callback<()>,
}

/// Illustration with its overlays, followed by the page text.
#[function_component(StoryView)]
pub fn story_view(p: &Props) -> Html {
    let overlays = overlays_for(&p.page.story).to_vec();
    let paragraphs = p
        .page
        .story
        .split("\n\n")
        .map(str::trim)
        .filter(|para| !para.is_empty())
        .map(|para| html! { <p>{ para.to_string() }</p> });
    html! {
        <article class="story-page">
            <div class="illustration">
                if let Some(src) = p.page.illustration() {
                    <img
                        src={src.to_string()}
                        alt={tr1("story.illustration_alt", "theme", &p.page.theme)}
                    />
                }
                <Overlays {overlays} on_select={p.on_overlay.clone()} />
            </div>
            <div class="story-text">{ for paragraphs }</div>
            if let Some(location) = p.page.location.as_ref() {
                <p class="story-location muted">{ location.clone() }</p>
            }
        </article>
    }
}
