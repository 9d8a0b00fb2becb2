//! # API Module
//!
//! HTTP endpoints for the temporary local server used during authentication.
//!
//! - [`callback`] - Receives the OAuth redirect from Spotify and completes
//!   the PKCE code exchange.
//! - [`health`] - Minimal health check endpoint, handy for verifying the
//!   callback server came up before the browser redirect arrives.
//!
//! Both handlers are plain async functions wired into an axum router by
//! [`crate::server::start_api_server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
