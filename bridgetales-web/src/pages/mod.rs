pub mod home;
pub mod library;
pub mod not_found;
pub mod profile;
