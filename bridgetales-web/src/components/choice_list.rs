use crate::i18n::t;
use bridgetales_core::ChoiceButton;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub buttons: Vec<ChoiceButton>,
    pub busy: bool,
    pub on_choose: Callback<ChoiceButton>,
}

#[function_component(ChoiceList)]
pub fn choice_list(p: &Props) -> Html {
    if p.buttons.is_empty() {
        return Html::default();
    }
    let items = p.buttons.iter().map(|button| {
        let onclick = {
            let cb = p.on_choose.clone();
            let button = button.clone();
            Callback::from(move |_: MouseEvent| cb.emit(button.clone()))
        };
        html! {
            <li>
                <button
                    class={classes!("choice-btn", button.is_ending.then_some("ending-btn"))}
                    disabled={p.busy}
                    {onclick}
                >
                    { button.label.clone() }
                </button>
            </li>
        }
    });
    html! {
        <section class="choices" aria-labelledby="choices-title">
            <h3 id="choices-title">{ t("story.choices") }</h3>
            <ul class="choice-list">{ for items }</ul>
            if p.busy {
                <p class="muted" aria-live="polite">{ t("story.continuing") }</p>
            }
        </section>
    }
}
