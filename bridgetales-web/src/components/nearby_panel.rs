use crate::app::state::NearbyState;
use crate::i18n::{t, tr1};
use bridgetales_core::Business;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: NearbyState,
    pub on_close: Callback<()>,
}

fn business_card(business: &Business) -> Html {
    let distance = business
        .distance_label()
        .map(|label| tr1("nearby.away", "distance", &label));
    html! {
        <li class="business-card">
            <h4>{ business.name.clone() }</h4>
            if !business.address.is_empty() {
                <p class="business-address">{ business.address.clone() }</p>
            }
            if let Some(distance) = distance {
                <p class="business-distance">{ distance }</p>
            }
            if let Some(phone) = business.phone.as_ref() {
                <p class="business-phone">
                    <a href={format!("tel:{phone}")}>{ phone.clone() }</a>
                </p>
            }
            if let Some(website) = business.website.as_ref() {
                <p class="business-website">
                    <a href={website.clone()} target="_blank" rel="noopener noreferrer">
                        { t("nearby.website") }
                    </a>
                </p>
            }
            if !business.categories.is_empty() {
                <p class="business-categories muted">{ business.categories.join(", ") }</p>
            }
        </li>
    }
}

#[function_component(NearbyPanel)]
pub fn nearby_panel(p: &Props) -> Html {
    let body = match &p.state {
        NearbyState::Closed => return Html::default(),
        NearbyState::Loading => html! {
            <p class="muted" aria-live="polite">{ t("nearby.loading") }</p>
        },
        NearbyState::Loaded(places) if places.is_empty() => html! {
            <p class="muted">{ t("nearby.empty") }</p>
        },
        NearbyState::Loaded(places) => html! {
            <ul class="business-list">{ for places.iter().map(business_card) }</ul>
        },
    };
    let on_close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <aside class="nearby-panel" aria-labelledby="nearby-title">
            <div class="nearby-header">
                <h3 id="nearby-title">{ t("nearby.title") }</h3>
                <button class="nearby-close" onclick={on_close}>{ t("nearby.close") }</button>
            </div>
            { body }
        </aside>
    }
}
