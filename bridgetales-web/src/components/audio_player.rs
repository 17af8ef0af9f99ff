use crate::i18n::t;
use bridgetales_core::AudioClock;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlMediaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub src: AttrValue,
}

fn media(node: &NodeRef) -> Option<HtmlMediaElement> {
    node.cast::<HtmlMediaElement>()
}

/// Narration controls over a hidden `<audio>` element. The parent remounts
/// the player for each new narration, which stops any previous playback.
#[function_component(AudioPlayer)]
pub fn audio_player(p: &Props) -> Html {
    let audio_ref = use_node_ref();
    let clock = use_state(AudioClock::default);
    let playing = use_state(|| false);

    {
        let audio_ref = audio_ref.clone();
        use_effect_with((), move |()| {
            move || {
                if let Some(el) = media(&audio_ref) {
                    let _ = el.pause();
                }
            }
        });
    }

    let sync = {
        let audio_ref = audio_ref.clone();
        let clock = clock.clone();
        Callback::from(move |_: Event| {
            if let Some(el) = media(&audio_ref) {
                clock.set(AudioClock::new(el.current_time(), el.duration()));
            }
        })
    };

    let on_ended = {
        let playing = playing.clone();
        let sync = sync.clone();
        Callback::from(move |e: Event| {
            playing.set(false);
            sync.emit(e);
        })
    };

    let seek = {
        let audio_ref = audio_ref.clone();
        let clock = clock.clone();
        move |time: f64| {
            if let Some(el) = media(&audio_ref) {
                el.set_current_time(time);
                clock.set(AudioClock::new(time, el.duration()));
            }
        }
    };

    let on_toggle = {
        let audio_ref = audio_ref.clone();
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(el) = media(&audio_ref) else {
                return;
            };
            if *playing {
                let _ = el.pause();
                playing.set(false);
                return;
            }
            match el.play() {
                Ok(promise) => {
                    playing.set(true);
                    let playing = playing.clone();
                    spawn_local(async move {
                        if let Err(err) = JsFuture::from(promise).await {
                            warn!("narration refused to play: {}", crate::dom::js_error_message(&err));
                            playing.set(false);
                        }
                    });
                }
                Err(err) => warn!("narration unavailable: {}", crate::dom::js_error_message(&err)),
            }
        })
    };

    let on_rewind = {
        let seek = seek.clone();
        let clock = *clock;
        Callback::from(move |_: MouseEvent| seek(clock.rewound()))
    };

    let on_forward = {
        let seek = seek.clone();
        let clock = *clock;
        Callback::from(move |_: MouseEvent| seek(clock.forwarded()))
    };

    let on_bar_click = {
        let clock = *clock;
        Callback::from(move |e: MouseEvent| {
            let Some(bar) = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let offset = f64::from(e.client_x()) - rect.left();
            if let Some(time) = clock.seek_target(offset, rect.width()) {
                seek(time);
            }
        })
    };

    let progress = format!("width: {:.1}%", clock.progress_percent());
    html! {
        <section class="audio-player" aria-label={t("audio.label")}>
            <audio
                ref={audio_ref}
                src={p.src.clone()}
                preload="metadata"
                ontimeupdate={sync.clone()}
                onloadedmetadata={sync}
                onended={on_ended}
            />
            <div class="audio-controls">
                <button class="audio-rewind" aria-label={t("audio.rewind")} onclick={on_rewind}>
                    { "\u{23ea}" }
                </button>
                <button class="audio-toggle" onclick={on_toggle}>
                    { if *playing { t("audio.pause") } else { t("audio.play") } }
                </button>
                <button class="audio-forward" aria-label={t("audio.forward")} onclick={on_forward}>
                    { "\u{23e9}" }
                </button>
            </div>
            <div
                class="audio-progress"
                role="progressbar"
                aria-label={t("audio.progress")}
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={format!("{:.0}", clock.progress_percent())}
                onclick={on_bar_click}
            >
                <div class="audio-progress-fill" style={progress}></div>
            </div>
            <div class="audio-time">
                <span>{ clock.current_label() }</span>
                { " / " }
                <span>{ clock.duration_label() }</span>
            </div>
        </section>
    }
}
