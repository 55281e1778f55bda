//! Renders a portfolio as a simulated terminal session.
//!
//! Pipeline: page content builds a [`transcript::Transcript`] of command
//! lines and response blocks → [`layout::flatten`] lays it out for a
//! terminal width → [`renderer::draw`] paints the visible slice, asking
//! [`app::App`] for each blinking cursor's current phase.

pub mod app;
pub mod descriptor;
pub mod error;
pub mod layout;
pub mod pages;
pub mod prompt;
pub mod renderer;
pub mod rich;
pub mod router;
pub mod row;
pub mod transcript;
pub mod wrap;
