use crate::error::StorageError;
use crate::profile::{FinishedBook, UserProfile};
use std::cell::RefCell;
use std::rc::Rc;

/// Key holding the serialized [`UserProfile`].
pub const PROFILE_KEY: &str = "userProfile";
/// Key holding the JSON array of [`FinishedBook`]s.
pub const BOOKS_KEY: &str = "finishedBooks";

/// Trait for abstracting local persistence of the profile and library.
/// Platform-specific implementations should provide this
pub trait LibraryStore {
    /// Load the saved profile, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored profile cannot be read or parsed.
    fn load_profile(&self) -> Result<Option<UserProfile>, StorageError>;

    /// Persist the profile, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be written.
    fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError>;

    /// Forget the saved profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the removal.
    fn clear_profile(&self) -> Result<(), StorageError>;

    /// Finished books in the order they were completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored library cannot be read or parsed.
    fn load_books(&self) -> Result<Vec<FinishedBook>, StorageError>;

    /// Replace the stored library.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be written.
    fn store_books(&self, books: &[FinishedBook]) -> Result<(), StorageError>;

    /// Append one finished book to the library.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be read or written.
    fn append_book(&self, book: &FinishedBook) -> Result<(), StorageError> {
        let mut books = self.load_books()?;
        books.push(book.clone());
        self.store_books(&books)
    }
}

/// In-memory store shared between clones, used by the tester and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profile: Rc<RefCell<Option<UserProfile>>>,
    books: Rc<RefCell<Vec<FinishedBook>>>,
}

impl LibraryStore for MemoryStore {
    fn load_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        Ok(self.profile.borrow().clone())
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        *self.profile.borrow_mut() = Some(profile.clone());
        Ok(())
    }

    fn clear_profile(&self) -> Result<(), StorageError> {
        self.profile.borrow_mut().take();
        Ok(())
    }

    fn load_books(&self) -> Result<Vec<FinishedBook>, StorageError> {
        Ok(self.books.borrow().clone())
    }

    fn store_books(&self, books: &[FinishedBook]) -> Result<(), StorageError> {
        *self.books.borrow_mut() = books.to_vec();
        Ok(())
    }
}

/// Parse a stored value, treating a missing key as `None`.
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] when the stored text is not valid JSON
/// for `T`.
pub fn decode_stored<T>(raw: Option<&str>) -> Result<Option<T>, StorageError>
where
    T: serde::de::DeserializeOwned,
{
    raw.map(|text| serde_json::from_str::<T>(text))
        .transpose()
        .map_err(StorageError::from)
}
