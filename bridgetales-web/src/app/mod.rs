use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod effects;
pub mod handlers;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    effects::use_request_runner(&app_state);
    effects::use_book_archiver(&app_state);
    effects::use_banner_timeout(&app_state);
    effects::use_page_announcer(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let handlers = AppHandlers::new(&app_state);

    view::render_app(&app_state, &handlers, &route, navigator)
}
