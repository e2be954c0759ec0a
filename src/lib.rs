//! Terminal client for a personal portfolio API.
//!
//! - [`client`]: HTTP calls and response decoding.
//! - [`view`]: view state, filter precedence and the async controller.
//! - [`render`]: plain-text rendering of the view.
//! - [`shell`]: the interactive line-command session.

pub mod client;
pub mod config;
pub mod models;
pub mod render;
pub mod shell;
pub mod view;
