#![cfg(target_arch = "wasm32")]

use bridgetales_core::{BOOKS_KEY, FinishedBook, LibraryStore, StoryPage, UserProfile, Voice};
use bridgetales_web::app::App;
use bridgetales_web::dom;
use bridgetales_web::storage::WebStore;
use wasm_bindgen_test::*;
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn reset_storage() {
    dom::local_storage().expect("localStorage").clear().expect("clear storage");
}

#[wasm_bindgen_test]
async fn app_shell_exposes_landmarks_and_theme_form() {
    reset_storage();
    Renderer::<App>::with_root(ensure_app_root()).render();
    dom::sleep_ms(50).await.expect("sleep");

    let doc = dom::document().expect("document");
    let main = doc.get_element_by_id("main").expect("main landmark");
    assert_eq!(main.tag_name(), "MAIN");
    assert!(
        doc.query_selector("a[href='#main']").expect("query").is_some(),
        "skip link should target main"
    );
    assert!(doc.get_element_by_id("theme-input").is_some());
    assert!(doc.get_element_by_id("story-status").is_some());
}

#[wasm_bindgen_test]
fn web_store_round_trips_profile_and_books() {
    reset_storage();
    let store = WebStore;
    assert_eq!(store.load_profile().unwrap(), None);

    let profile = UserProfile::new("Ada", 8, Voice::Ivy).unwrap();
    store.save_profile(&profile).unwrap();
    assert_eq!(store.load_profile().unwrap(), Some(profile.clone()));

    let book = FinishedBook::new(
        String::from("book-1"),
        vec![StoryPage {
            story: String::from("The end."),
            theme: String::from("dragons"),
            ..StoryPage::default()
        }],
        "2026-10-18T09:30:00.000Z",
        Some(&profile),
    );
    store.append_book(&book).unwrap();
    assert_eq!(store.load_books().unwrap(), vec![book]);

    store.clear_profile().unwrap();
    assert_eq!(store.load_profile().unwrap(), None);
}

#[wasm_bindgen_test]
fn corrupt_library_is_discarded() {
    reset_storage();
    dom::local_storage()
        .unwrap()
        .set_item(BOOKS_KEY, "{not json")
        .unwrap();
    assert!(WebStore.load_books().unwrap().is_empty());
}
