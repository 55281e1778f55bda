//! Static page content.
//!
//! Each page exposes a `transcript()` builder. Content is compiled in;
//! the only failure is a malformed descriptor, which the tests catch.

pub mod about;
pub mod home;
pub mod projects;

/// Owner of the portfolio, shown in the header.
pub const SITE_TITLE: &str = "Brook Jeynes";

/// Blank lines below a page's idle prompt.
pub const BOTTOM_PADDING: u16 = 2;
