//! `BridgeTales` story client core
//!
//! Platform-agnostic logic for the interactive storyteller front-end: the paged
//! story session, the request guard that keeps one generation in flight, the
//! API and persistence ports, and the small presentation heuristics the UI
//! renders from. This crate has no DOM or network dependencies.

pub mod api;
pub mod audio;
pub mod config;
pub mod controller;
pub mod error;
pub mod location;
pub mod overlay;
pub mod page;
pub mod profile;
pub mod session;
pub mod share;
pub mod storage;
pub mod themes;
pub mod view;

pub use api::{ContinueRequest, GenerateRequest, NearbyRequest, StoryApi, voice_demo_query};
pub use audio::{AudioClock, SKIP_SECONDS, audio_url, format_time};
pub use config::ClientConfig;
pub use controller::{StoryController, archive_book, newest_first, persist_profile};
pub use error::{ApiError, ClientError, ProfileError, SessionError, StorageError, banner_message};
pub use location::{Business, Coordinates, DEFAULT_COORDINATES, format_distance};
pub use overlay::{Overlay, OverlayCategory, OverlaySlot, overlays_for};
pub use page::{StoryPage, StoryResponse};
pub use profile::{FinishedBook, Timestamp, UserProfile, Voice};
pub use session::{
    Completion, ContinueTicket, Direction, GenerateTicket, RequestId, RequestKind, RequestState, Session,
};
pub use share::{ShareContent, share_content, share_latest};
pub use storage::{BOOKS_KEY, LibraryStore, MemoryStore, PROFILE_KEY};
pub use themes::{QUICK_THEMES, normalize_theme};
pub use view::{ChoiceButton, ENDING_CHOICE, PageNavigation, choice_buttons, page_navigation};
