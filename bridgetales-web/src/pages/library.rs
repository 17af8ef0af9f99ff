use crate::components::library::Library;
use bridgetales_core::FinishedBook;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub books: Vec<FinishedBook>,
}

#[function_component(LibraryPage)]
pub fn library_page(p: &Props) -> Html {
    html! {
        <div class="library-page">
            <Library books={p.books.clone()} />
        </div>
    }
}
