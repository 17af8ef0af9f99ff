//! `localStorage` repository for the profile and finished books.

use crate::dom;
use bridgetales_core::storage::decode_stored;
use bridgetales_core::{
    BOOKS_KEY, FinishedBook, LibraryStore, PROFILE_KEY, StorageError, UserProfile,
};
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn backend(err: &JsValue) -> StorageError {
    StorageError::Backend(dom::js_error_message(err))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebStore;

impl WebStore {
    fn storage() -> Result<Storage, StorageError> {
        dom::local_storage().map_err(|err| backend(&err))
    }

    fn read(key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|err| backend(&err))
    }

    fn write(key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| backend(&err))
    }
}

impl LibraryStore for WebStore {
    fn load_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        decode_stored(Self::read(PROFILE_KEY)?.as_deref())
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        Self::write(PROFILE_KEY, &serde_json::to_string(profile)?)
    }

    fn clear_profile(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(PROFILE_KEY)
            .map_err(|err| backend(&err))
    }

    fn load_books(&self) -> Result<Vec<FinishedBook>, StorageError> {
        match decode_stored::<Vec<FinishedBook>>(Self::read(BOOKS_KEY)?.as_deref()) {
            Ok(books) => Ok(books.unwrap_or_default()),
            Err(StorageError::Serialization(reason)) => {
                warn!("discarding unreadable library: {reason}");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn store_books(&self, books: &[FinishedBook]) -> Result<(), StorageError> {
        Self::write(BOOKS_KEY, &serde_json::to_string(books)?)
    }
}

/// Saved profile for first render; unreadable data is treated as absent.
#[must_use]
pub fn initial_profile() -> Option<UserProfile> {
    WebStore.load_profile().unwrap_or_else(|err| {
        warn!("ignoring saved profile: {err}");
        None
    })
}

/// Library as shown on the books page.
#[must_use]
pub fn initial_books() -> Vec<FinishedBook> {
    WebStore
        .load_books()
        .map(bridgetales_core::newest_first)
        .unwrap_or_else(|err| {
            warn!("library unavailable: {err}");
            Vec::new()
        })
}
