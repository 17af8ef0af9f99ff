pub mod audio_player;
pub mod choice_list;
pub mod error_banner;
pub mod footer;
pub mod header;
pub mod library;
pub mod nearby_panel;
pub mod overlays;
pub mod page_nav;
pub mod profile_form;
pub mod story_view;
pub mod theme_form;
