//! # CLI Module
//!
//! User-facing command implementations for Spoplcli, a Spotify API client
//! for building playlists from plain-text song lists. Each submodule backs
//! one subcommand and coordinates between the Spotify API layer, local data
//! management and terminal output.
//!
//! ## Commands
//!
//! - [`auth`] - Runs the OAuth 2.0 PKCE authentication flow.
//! - [`search`] - Searches tracks and prints them as a table, optionally
//!   exporting the results to a text or CSV file.
//! - [`resolve`] - Resolves a single song/artist pair to its best-matching
//!   track using the fuzzy match scorer.
//! - [`playlist`] - Reads a song list file, resolves every entry and creates
//!   a playlist from the matched tracks.
//!
//! All commands print progress and errors through the crate's terminal
//! macros; unrecoverable failures terminate the process with a message
//! instead of propagating errors to `main`.

mod auth;
mod playlist;
mod resolve;
mod search;

pub use auth::auth;
pub use playlist::playlist;
pub use resolve::resolve;
pub use search::search;
