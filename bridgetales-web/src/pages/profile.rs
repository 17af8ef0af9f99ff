use crate::components::profile_form::{ProfileDraft, ProfileForm};
use bridgetales_core::{UserProfile, Voice};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub profile: Option<UserProfile>,
    pub on_save: Callback<ProfileDraft>,
    pub on_logout: Callback<()>,
    pub on_voice_demo: Callback<Voice>,
}

#[function_component(ProfilePage)]
pub fn profile_page(p: &Props) -> Html {
    html! {
        <div class="profile-page">
            <ProfileForm
                profile={p.profile.clone()}
                on_save={p.on_save.clone()}
                on_logout={p.on_logout.clone()}
                on_voice_demo={p.on_voice_demo.clone()}
            />
        </div>
    }
}
