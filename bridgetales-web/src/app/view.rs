use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::error_banner::ErrorBanner;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::home::HomePage;
use crate::pages::library::LibraryPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

fn render_page(state: &AppState, handlers: &AppHandlers, route: &Route, on_navigate: &Callback<Route>) -> Html {
    match route {
        Route::Home => html! {
            <HomePage
                story={(*state.story).clone()}
                nearby={(*state.nearby).clone()}
                api_base={AttrValue::from(state.config.api_base_url.clone())}
                on_generate={handlers.generate.clone()}
                on_choose={handlers.choose.clone()}
                on_navigate={handlers.navigate.clone()}
                on_new_story={handlers.new_story.clone()}
                on_share={handlers.share.clone()}
                on_find_nearby={handlers.find_nearby.clone()}
                on_close_nearby={handlers.close_nearby.clone()}
            />
        },
        Route::Profile => html! {
            <ProfilePage
                profile={(*state.profile).clone()}
                on_save={handlers.save_profile.clone()}
                on_logout={handlers.logout.clone()}
                on_voice_demo={handlers.voice_demo.clone()}
            />
        },
        Route::Library => html! { <LibraryPage books={(*state.books).clone()} /> },
        Route::NotFound => html! { <NotFoundPage on_navigate={on_navigate.clone()} /> },
    }
}

pub fn render_app(
    state: &AppState,
    handlers: &AppHandlers,
    route: &Route,
    navigator: Option<Navigator>,
) -> Html {
    let on_navigate = Callback::from(move |target: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
    });
    let banner = state.story.banner.clone().map(|banner| {
        html! {
            <ErrorBanner
                id={banner.id}
                message={AttrValue::from(banner.message)}
                on_dismiss={handlers.dismiss_error.clone()}
            />
        }
    });
    let reader_name = state
        .profile
        .as_ref()
        .map(|profile| AttrValue::from(profile.name.clone()));

    html! {
        <>
            <Header current={route.clone()} on_navigate={on_navigate.clone()} {reader_name} />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { for banner }
                { render_page(state, handlers, route, &on_navigate) }
                <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
            </main>
            <Footer />
        </>
    }
}
