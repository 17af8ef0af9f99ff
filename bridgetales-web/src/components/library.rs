use crate::i18n::{t, tr1};
use bridgetales_core::FinishedBook;
use yew::prelude::*;

/// Display record for one finished book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub pages: String,
    pub completed: String,
    pub author: Option<String>,
}

impl BookCard {
    #[must_use]
    pub fn from_book(book: &FinishedBook) -> Self {
        let date = book.completed_at.get(..10).unwrap_or(&book.completed_at);
        Self {
            id: book.id.clone(),
            title: book.theme.clone(),
            pages: tr1("library.pages", "count", &book.page_count().to_string()),
            completed: tr1("library.completed", "date", date),
            author: book
                .user_name
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .map(|name| tr1("library.by", "name", name)),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Books in display order.
    pub books: Vec<FinishedBook>,
}

#[function_component(Library)]
pub fn library(p: &Props) -> Html {
    if p.books.is_empty() {
        return html! {
            <section class="library">
                <h2>{ t("library.title") }</h2>
                <p class="muted library-empty">{ t("library.empty") }</p>
            </section>
        };
    }
    let cards = p.books.iter().map(BookCard::from_book).map(|card| {
        html! {
            <li class="book-card" key={card.id.clone()}>
                <h3 class="book-title">{ card.title }</h3>
                <p class="book-pages">{ card.pages }</p>
                <p class="book-completed muted">{ card.completed }</p>
                if let Some(author) = card.author {
                    <p class="book-author">{ author }</p>
                }
            </li>
        }
    });
    html! {
        <section class="library">
            <h2>{ t("library.title") }</h2>
            <ul class="book-list">{ for cards }</ul>
        </section>
    }
}
