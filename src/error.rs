//! Errors raised while authoring or resolving page content.
//!
//! Rendering itself is infallible; these only surface when static content
//! is malformed or a route does not exist.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// An argument descriptor was built with an empty name.
    #[error("argument descriptor name must not be empty")]
    EmptyName,

    /// No page is registered for the requested path.
    #[error("no page at '{0}' (try --list-routes)")]
    UnknownRoute(String),
}
