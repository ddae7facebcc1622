//! Application routes and navigation guarding

use yew_router::prelude::*;

/// All routes of the application
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/home")]
    Home,
    #[at("/profile")]
    Profile,
    #[at("/join")]
    Join,
    #[at("/games/:id")]
    Game { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether the route is only reachable with a session credential
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Profile | Self::Join | Self::Game { .. }
        )
    }
}

/// Navigation guard: where to send the visitor instead of rendering `route`.
///
/// `/` always lands on the login screen first; an authenticated visitor then
/// bounces from `/login` straight to `/home`.
pub fn redirect_for(route: &Route, authenticated: bool) -> Option<Route> {
    match route {
        Route::Root => Some(Route::Login),
        Route::Login if authenticated => Some(Route::Home),
        route if route.requires_auth() && !authenticated => Some(Route::Login),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_routes_redirect_to_login_without_credential() {
        let guarded = [
            Route::Home,
            Route::Profile,
            Route::Join,
            Route::Game {
                id: "42".to_string(),
            },
        ];
        for route in guarded {
            assert_eq!(redirect_for(&route, false), Some(Route::Login));
        }
    }

    #[test]
    fn guarded_routes_render_with_credential() {
        let guarded = [
            Route::Home,
            Route::Profile,
            Route::Join,
            Route::Game {
                id: "42".to_string(),
            },
        ];
        for route in guarded {
            assert_eq!(redirect_for(&route, true), None);
        }
    }

    #[test]
    fn login_redirects_home_with_credential() {
        assert_eq!(redirect_for(&Route::Login, true), Some(Route::Home));
    }

    #[test]
    fn login_renders_without_credential() {
        assert_eq!(redirect_for(&Route::Login, false), None);
    }

    #[test]
    fn root_always_redirects_to_login() {
        assert_eq!(redirect_for(&Route::Root, false), Some(Route::Login));
        assert_eq!(redirect_for(&Route::Root, true), Some(Route::Login));
    }

    #[test]
    fn not_found_is_public() {
        assert_eq!(redirect_for(&Route::NotFound, false), None);
        assert_eq!(redirect_for(&Route::NotFound, true), None);
    }

    #[test]
    fn game_route_recognizes_id_segment() {
        assert_eq!(
            Route::recognize("/games/42"),
            Some(Route::Game {
                id: "42".to_string()
            })
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
