//! # API Module
//!
//! HTTP endpoints for the local callback server that backs the OAuth
//! authorization-code flow.
//!
//! - [`callback`] - Receives the redirect from Spotify's authorization
//!   server, checks the CSRF `state` value, and exchanges the code for a
//!   token.
//! - [`health`] - Health check returning application status and version.
//!
//! Built on [Axum](https://docs.rs/axum); both handlers plug straight into
//! its routing system in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
