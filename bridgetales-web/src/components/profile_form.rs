use crate::i18n::t;
use bridgetales_core::profile::{MAX_AGE, MIN_AGE};
use bridgetales_core::{ProfileError, UserProfile, Voice};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Raw form values before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub age: String,
    pub voice: Voice,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        profile.map_or_else(Self::default, |profile| Self {
            name: profile.name.clone(),
            age: profile.age.to_string(),
            voice: profile.voice,
        })
    }

    /// Turn the form values into a profile.
    ///
    /// # Errors
    /// Returns [`ProfileError`] for a blank name or an age that is not a whole
    /// number in range.
    pub fn validate(&self) -> Result<UserProfile, ProfileError> {
        let age = self
            .age
            .trim()
            .parse::<u8>()
            .map_err(|_| ProfileError::AgeOutOfRange {
                min: MIN_AGE,
                max: MAX_AGE,
            })?;
        UserProfile::new(&self.name, age, self.voice)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub profile: Option<UserProfile>,
    pub on_save: Callback<ProfileDraft>,
    pub on_logout: Callback<()>,
    pub on_voice_demo: Callback<Voice>,
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[function_component(ProfileForm)]
pub fn profile_form(p: &Props) -> Html {
    let draft = use_state(|| ProfileDraft::from_profile(p.profile.as_ref()));

    {
        let draft = draft.clone();
        use_effect_with(p.profile.clone(), move |profile| {
            draft.set(ProfileDraft::from_profile(profile.as_ref()));
        });
    }

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(name) = input_value(&e) {
                draft.set(ProfileDraft {
                    name,
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_age = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(age) = input_value(&e) {
                draft.set(ProfileDraft {
                    age,
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_voice = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let voice = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                .and_then(|select| Voice::from_id(&select.value()));
            if let Some(voice) = voice {
                draft.set(ProfileDraft {
                    voice,
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_save = {
        let draft = draft.clone();
        let cb = p.on_save.clone();
        Callback::from(move |_: MouseEvent| cb.emit((*draft).clone()))
    };

    let on_demo = {
        let voice = draft.voice;
        let cb = p.on_voice_demo.clone();
        Callback::from(move |_: MouseEvent| cb.emit(voice))
    };

    let on_logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let options = Voice::ALL.into_iter().map(|voice| {
        html! {
            <option value={voice.id()} selected={voice == draft.voice}>
                { voice.description() }
            </option>
        }
    });

    html! {
        <section class="profile-form" aria-labelledby="profile-title">
            <h2 id="profile-title">{ t("profile.title") }</h2>
            <label for="profile-name">{ t("profile.name") }</label>
            <input id="profile-name" type="text" value={draft.name.clone()} oninput={on_name} />
            <label for="profile-age">{ t("profile.age") }</label>
            <input
                id="profile-age"
                type="number"
                min={MIN_AGE.to_string()}
                max={MAX_AGE.to_string()}
                value={draft.age.clone()}
                oninput={on_age}
            />
            <label for="profile-voice">{ t("profile.voice") }</label>
            <div class="voice-row">
                <select id="profile-voice" onchange={on_voice}>{ for options }</select>
                <button class="voice-demo" onclick={on_demo}>{ t("profile.demo") }</button>
            </div>
            <div class="profile-actions">
                <button id="profile-save" class="primary" onclick={on_save}>{ t("profile.save") }</button>
                if p.profile.is_some() {
                    <button id="profile-logout" onclick={on_logout}>{ t("profile.logout") }</button>
                }
            </div>
        </section>
    }
}
