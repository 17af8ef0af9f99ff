use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/profile")]
    Profile,
    #[at("/library")]
    Library,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Entries shown in the header navigation, with their label keys.
    pub const NAV: [(Self, &'static str); 3] = [
        (Self::Home, "nav.home"),
        (Self::Profile, "nav.profile"),
        (Self::Library, "nav.library"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/library"), Some(Route::Library));
        assert_eq!(Route::Profile.to_path(), "/profile");
    }
}
