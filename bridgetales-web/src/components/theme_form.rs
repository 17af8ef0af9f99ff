use crate::i18n::t;
use bridgetales_core::QUICK_THEMES;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub busy: bool,
    pub on_generate: Callback<String>,
}

/// Theme input with quick-pick buttons. Enter, the submit button and the quick
/// picks all start a new story.
#[function_component(ThemeForm)]
pub fn theme_form(p: &Props) -> Html {
    let theme = use_state(String::new);

    let on_input = {
        let theme = theme.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                theme.set(input.value());
            }
        })
    };

    let on_keydown = {
        let theme = theme.clone();
        let cb = p.on_generate.clone();
        let busy = p.busy;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !busy {
                e.prevent_default();
                cb.emit((*theme).clone());
            }
        })
    };

    let on_submit = {
        let theme = theme.clone();
        let cb = p.on_generate.clone();
        Callback::from(move |_: MouseEvent| cb.emit((*theme).clone()))
    };

    let quick = QUICK_THEMES.iter().map(|preset| {
        let onclick = {
            let theme = theme.clone();
            let cb = p.on_generate.clone();
            let preset = (*preset).to_string();
            Callback::from(move |_: MouseEvent| {
                theme.set(preset.clone());
                cb.emit(preset.clone());
            })
        };
        html! {
            <button class="quick-theme" disabled={p.busy} {onclick}>{ *preset }</button>
        }
    });

    html! {
        <section class="theme-form" aria-labelledby="theme-label">
            <label id="theme-label" for="theme-input">{ t("theme.label") }</label>
            <div class="theme-row">
                <input
                    id="theme-input"
                    type="text"
                    value={(*theme).clone()}
                    placeholder={t("theme.placeholder")}
                    disabled={p.busy}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button id="generate-btn" class="primary" disabled={p.busy} onclick={on_submit}>
                    { if p.busy { t("theme.loading") } else { t("theme.submit") } }
                </button>
            </div>
            <div class="quick-themes" role="group" aria-label={t("theme.quick")}>
                { for quick }
            </div>
        </section>
    }
}
