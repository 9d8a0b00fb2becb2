//! # Spotify Integration Module
//!
//! This module is the integration layer between spoplcli and Spotify's
//! services. It handles HTTP communication, the OAuth 2.0 PKCE flow, track
//! search and playlist management, so the CLI layer above never touches raw
//! requests.
//!
//! ## Submodules
//!
//! - [`auth`] - OAuth 2.0 PKCE authentication flow (code challenge, local
//!   callback server, token exchange and persistence)
//! - [`search`] - Track search against the documented Web API
//!   (`GET /search?type=track`)
//! - [`pathfinder`] - Track search against the undocumented GraphQL endpoint
//!   used by Spotify's web player; works with or without a bearer token but
//!   may break whenever Spotify changes their frontend
//! - [`playlist`] - Playlist creation and modification
//!   (`GET /me`, `GET /me/playlists`, `POST /users/{id}/playlists`,
//!   `POST /playlists/{id}/tracks`)
//!
//! ## Error handling
//!
//! Rate-limited responses (429) are retried after the `Retry-After` delay
//! when it is reasonable, and transient 502 errors are retried after a fixed
//! pause, mirroring Spotify's documented behavior. Other HTTP failures are
//! propagated as `reqwest::Error` for the CLI layer to report.
//!
//! ## Authentication
//!
//! The Web API endpoints require a bearer token obtained through the PKCE
//! flow (`spoplcli auth`); tokens are refreshed transparently through
//! [`crate::management::TokenManager`]. The pathfinder endpoint accepts an
//! optional token and otherwise impersonates the anonymous web player.

pub mod auth;
pub mod pathfinder;
pub mod playlist;
pub mod search;
