//! Spotify Playlist Builder CLI Library
//!
//! This library provides functionality for turning a plain song list
//! (artist/title pairs) into a Spotify playlist. Track candidates come from
//! Spotify's Web API search or the unofficial GraphQL search used by the web
//! player, and ambiguous results are resolved with a small fuzzy matcher.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token and match-cache persistence
//! - `matcher` - Fuzzy track matching between targets and search results
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API and GraphQL search clients
//! - `types` - Data structures and type definitions
//! - `utils` - Song list parsing, export and other helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod matcher;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it
/// composes in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for unrecoverable errors; code after this macro never runs.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
