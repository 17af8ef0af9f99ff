use bridgetales_core::{
    ChoiceButton, Direction, ENDING_CHOICE, FinishedBook, PageNavigation, StoryPage,
    StoryResponse, UserProfile, Voice,
};
use bridgetales_web::app::state::{NearbyState, Outgoing, StoryAction, StoryState};
use bridgetales_web::components::audio_player::AudioPlayer;
use bridgetales_web::components::choice_list::ChoiceList;
use bridgetales_web::components::error_banner::ErrorBanner;
use bridgetales_web::components::footer::Footer;
use bridgetales_web::components::header::Header;
use bridgetales_web::components::library::Library;
use bridgetales_web::components::nearby_panel::NearbyPanel;
use bridgetales_web::components::page_nav::PageNav;
use bridgetales_web::components::profile_form::ProfileForm;
use bridgetales_web::components::story_view::StoryView;
use bridgetales_web::components::theme_form::ThemeForm;
use bridgetales_web::pages::home::HomePage;
use bridgetales_web::router::Route;
use futures::executor::block_on;
use std::rc::Rc;
use yew::{AttrValue, Callback, LocalServerRenderer, Reducible};

fn page(story: &str) -> StoryPage {
    StoryPage {
        story: story.to_string(),
        images: vec![String::from("https://img.example/ship.png")],
        choices: vec![String::from("Fight"), String::from("Flee")],
        theme: String::from("pirates"),
        location: None,
    }
}

fn started_story(voice_file: Option<&str>) -> StoryState {
    let state = Rc::new(StoryState::default()).reduce(StoryAction::Generate(String::from("pirates")));
    let id = state.outgoing.as_ref().map(Outgoing::id).unwrap();
    let state = state.reduce(StoryAction::Completed {
        id,
        response: StoryResponse {
            story: String::from("The ship set sail past the market."),
            images: vec![String::from("https://img.example/ship.png")],
            choices: vec![String::from("Fight"), String::from("Flee")],
            theme: String::from("pirates"),
            location: None,
            voice_file: voice_file.map(str::to_string),
        },
    });
    (*state).clone()
}

fn home_props(story: StoryState) -> bridgetales_web::pages::home::Props {
    bridgetales_web::pages::home::Props {
        story,
        nearby: NearbyState::Closed,
        api_base: AttrValue::from("http://localhost:8000"),
        on_generate: Callback::noop(),
        on_choose: Callback::noop(),
        on_navigate: Callback::noop(),
        on_new_story: Callback::noop(),
        on_share: Callback::noop(),
        on_find_nearby: Callback::noop(),
        on_close_nearby: Callback::noop(),
    }
}

#[test]
fn header_renders_navigation_and_reader() {
    let props = bridgetales_web::components::header::Props {
        current: Route::Library,
        on_navigate: Callback::noop(),
        reader_name: Some(AttrValue::from("Mia")),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("BridgeTales"));
    assert!(html.contains("My Books"));
    assert!(html.contains("Reading as Mia"));
    assert!(html.contains("aria-current=\"page\""));
}

#[test]
fn footer_renders_copy() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer>"));
}

#[test]
fn theme_form_lists_quick_themes_and_disables_while_busy() {
    let props = bridgetales_web::components::theme_form::Props {
        busy: false,
        on_generate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ThemeForm>::with_props(props).render());
    for preset in ["kindness", "space adventure", "dragons"] {
        assert!(html.contains(preset), "missing quick theme {preset}");
    }
    assert!(html.contains("Create Story"));

    let props = bridgetales_web::components::theme_form::Props {
        busy: true,
        on_generate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ThemeForm>::with_props(props).render());
    assert!(html.contains("Writing your story..."));
    assert!(html.contains("disabled"));
}

#[test]
fn choice_list_renders_ending_button_last() {
    let props = bridgetales_web::components::choice_list::Props {
        buttons: vec![
            ChoiceButton {
                label: String::from("Fight"),
                is_ending: false,
            },
            ChoiceButton {
                label: ENDING_CHOICE.to_string(),
                is_ending: true,
            },
        ],
        busy: false,
        on_choose: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ChoiceList>::with_props(props).render());
    let fight = html.find("Fight").unwrap();
    let ending = html.find(ENDING_CHOICE).unwrap();
    assert!(fight < ending);
    assert!(html.contains("ending-btn"));
}

#[test]
fn empty_choice_list_renders_nothing() {
    let props = bridgetales_web::components::choice_list::Props {
        buttons: Vec::new(),
        busy: false,
        on_choose: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ChoiceList>::with_props(props).render());
    assert!(!html.contains("choice-list"));
}

#[test]
fn page_nav_shows_indicator_and_disabled_edges() {
    let props = bridgetales_web::components::page_nav::Props {
        nav: PageNavigation {
            indicator: String::from("Page 1 of 2"),
            can_go_back: false,
            can_go_forward: true,
        },
        on_navigate: Callback::<Direction>::noop(),
    };
    let html = block_on(LocalServerRenderer::<PageNav>::with_props(props).render());
    assert!(html.contains("Page 1 of 2"));
    let prev = html.find("prev-page").unwrap();
    let next = html.find("next-page").unwrap();
    assert!(html[prev..next].contains("disabled"));
    assert!(!html[next..].contains("disabled"));
}

#[test]
fn story_view_places_overlays_for_keywords() {
    let props = bridgetales_web::components::story_view::Props {
        page: StoryPage {
            story: String::from("They ate at a cafe.\n\nThen they ran to the park."),
            ..page("")
        },
        on_overlay: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<StoryView>::with_props(props).render());
    assert!(html.contains("https://img.example/ship.png"));
    assert!(html.contains("overlay-food"));
    assert!(html.contains("overlay-park"));
    assert!(!html.contains("overlay-generic"));
    let food = html.find("slot-top-left").unwrap();
    let park = html.find("slot-top-right").unwrap();
    assert!(food < park);
    assert!(html.contains("<p>Then they ran to the park.</p>"));
}

#[test]
fn story_view_falls_back_to_generic_overlay() {
    let props = bridgetales_web::components::story_view::Props {
        page: page("A dragon sneezed."),
        on_overlay: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<StoryView>::with_props(props).render());
    assert!(html.contains("overlay-generic"));
}

#[test]
fn audio_player_renders_controls_for_source() {
    let props = bridgetales_web::components::audio_player::Props {
        src: AttrValue::from("http://localhost:8000/story_audio.mp3"),
    };
    let html = block_on(LocalServerRenderer::<AudioPlayer>::with_props(props).render());
    assert!(html.contains("story_audio.mp3"));
    assert!(html.contains("Play"));
    assert!(html.contains("0:00"));
}

#[test]
fn error_banner_shows_message() {
    let props = bridgetales_web::components::error_banner::Props {
        id: 1,
        message: AttrValue::from("Error: Failed to fetch. Please try again."),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ErrorBanner>::with_props(props).render());
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Failed to fetch"));
}

#[test]
fn nearby_panel_lists_places() {
    let business: bridgetales_core::Business = serde_json::from_str(
        r#"{"name":"Harbor Cafe","address":"1 Pier St","phone":"555-0100","website":"","categories":["cafe","bakery"],"distance":1234.0}"#,
    )
    .unwrap();
    let props = bridgetales_web::components::nearby_panel::Props {
        state: NearbyState::Loaded(vec![business]),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NearbyPanel>::with_props(props).render());
    assert!(html.contains("Harbor Cafe"));
    assert!(html.contains("1.2 km away"));
    assert!(html.contains("tel:555-0100"));
    assert!(html.contains("cafe, bakery"));
    assert!(!html.contains("business-website"));

    let closed = bridgetales_web::components::nearby_panel::Props {
        state: NearbyState::Closed,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NearbyPanel>::with_props(closed).render());
    assert!(!html.contains("nearby-panel"));
}

#[test]
fn profile_form_prefills_saved_profile() {
    let props = bridgetales_web::components::profile_form::Props {
        profile: Some(UserProfile::new("Noor", 9, Voice::Kevin).unwrap()),
        on_save: Callback::noop(),
        on_logout: Callback::noop(),
        on_voice_demo: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProfileForm>::with_props(props).render());
    assert!(html.contains("Noor"));
    assert!(html.contains("Kevin (child, male)"));
    assert!(html.contains("profile-logout"));
}

#[test]
fn library_lists_books_or_empty_message() {
    let props = bridgetales_web::components::library::Props { books: Vec::new() };
    let html = block_on(LocalServerRenderer::<Library>::with_props(props).render());
    assert!(html.contains("No finished books yet"));

    let book = FinishedBook::new(
        String::from("book-1"),
        vec![page("One."), page("Two.")],
        "2026-10-18T09:30:00.000Z",
        None,
    );
    let props = bridgetales_web::components::library::Props { books: vec![book] };
    let html = block_on(LocalServerRenderer::<Library>::with_props(props).render());
    assert!(html.contains("pirates"));
    assert!(html.contains("2 pages"));
    assert!(html.contains("Finished 2026-10-18"));
}

#[test]
fn home_page_without_story_shows_theme_form() {
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props(StoryState::default())).render(),
    );
    assert!(html.contains("theme-input"));
    assert!(!html.contains("story-page"));
}

#[test]
fn home_page_renders_first_page_with_two_choices_and_ending() {
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props(started_story(Some(
            "story_audio.mp3",
        ))))
        .render(),
    );
    assert!(html.contains("The ship set sail past the market."));
    assert_eq!(html.matches("choice-btn").count(), 3);
    assert!(html.contains(ENDING_CHOICE));
    assert!(!html.contains("page-indicator"));
    assert!(html.contains("http://localhost:8000/story_audio.mp3"));
    assert!(html.contains("overlay-shop"));
}

#[test]
fn home_page_hides_choices_on_earlier_pages() {
    let state = Rc::new(started_story(None));
    let state = state.reduce(StoryAction::Continue {
        choice: String::from("Fight"),
        is_ending: false,
    });
    let id = state.outgoing.as_ref().map(Outgoing::id).unwrap();
    let state = state.reduce(StoryAction::Completed {
        id,
        response: StoryResponse {
            story: String::from("Swords clashed."),
            choices: vec![String::from("Win")],
            theme: String::from("pirates"),
            ..StoryResponse::default()
        },
    });
    let back = state.reduce(StoryAction::Navigate(Direction::Previous));

    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(home_props((*back).clone())).render(),
    );
    assert!(html.contains("Page 1 of 2"));
    assert!(!html.contains("choice-btn"));
    assert!(!html.contains("story_audio"));
}
