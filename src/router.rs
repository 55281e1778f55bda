//! Maps paths to pages.
//!
//! The renderer never sees paths; it receives the resolved transcript.

use std::fmt;

use crate::error::ContentError;
use crate::pages;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Projects,
}

impl Route {
    /// All routes in header order.
    pub const ALL: [Route; 3] = [Route::Home, Route::About, Route::Projects];

    /// Resolves a path. A missing leading slash and trailing slashes are
    /// tolerated; matching is case-sensitive.
    pub fn from_path(path: &str) -> Result<Self, ContentError> {
        let trimmed = path.trim().trim_matches('/');
        match trimmed {
            "" => Ok(Route::Home),
            "about" => Ok(Route::About),
            "projects" => Ok(Route::Projects),
            _ => Err(ContentError::UnknownRoute(path.to_string())),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
        }
    }

    /// Label shown in the header.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Route::Home => Route::About,
            Route::About => Route::Projects,
            Route::Projects => Route::Home,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Route::Home => Route::Projects,
            Route::About => Route::Home,
            Route::Projects => Route::About,
        }
    }

    /// Builds the page's static transcript.
    pub fn transcript(self) -> Result<Transcript, ContentError> {
        match self {
            Route::Home => pages::home::transcript(),
            Route::About => pages::about::transcript(),
            Route::Projects => pages::projects::transcript(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Ok(Route::Home));
        assert_eq!(Route::from_path(""), Ok(Route::Home));
        assert_eq!(Route::from_path("/about"), Ok(Route::About));
        assert_eq!(Route::from_path("/projects/"), Ok(Route::Projects));
        assert_eq!(Route::from_path("about"), Ok(Route::About));
    }

    #[test]
    fn test_route_unknown() {
        assert_eq!(
            Route::from_path("/blog"),
            Err(ContentError::UnknownRoute("/blog".to_string()))
        );
    }

    #[test]
    fn test_route_path_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Ok(route));
        }
    }

    #[test]
    fn test_route_cycle() {
        assert_eq!(Route::Home.next(), Route::About);
        assert_eq!(Route::Projects.next(), Route::Home);
        assert_eq!(Route::Home.previous(), Route::Projects);
        for route in Route::ALL {
            assert_eq!(route.next().previous(), route);
        }
    }

    #[test]
    fn test_every_route_builds() {
        for route in Route::ALL {
            assert!(route.transcript().is_ok(), "{route} failed to build");
        }
    }
}
