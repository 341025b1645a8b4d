//! Spotify "now playing" proxy library
//!
//! This library exposes the track currently playing on a single Spotify
//! account through two public HTTP endpoints, one JSON and one HTML, so a
//! personal website can embed a "now playing" widget without holding the
//! account's API credentials.
//!
//! Every inbound request runs the same pipeline: the stored refresh token is
//! exchanged for a fresh access token, the currently playing endpoint is
//! queried with it, and the payload is projected into a small summary that
//! the handlers render as JSON or HTML.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the JSON and HTML endpoints
//! - `config` - Configuration loaded from environment variables
//! - `error` - Error taxonomy of the request pipeline
//! - `server` - Router construction and the listening server
//! - `spotify` - Spotify Web API client (token exchange, playback fetch)
//! - `types` - Data structures and type definitions
//! - `utils` - Pure projection and escaping helpers
//!
//! # Example
//!
//! ```
//! use nowplaying::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> nowplaying::Res<()> {
//!     config::load_env()?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for startup and server plumbing.
///
/// Request handling uses the typed errors from [`error`]; this alias covers
/// the places where any error simply has to be reported, such as binding the
/// listener or building the HTTP client.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Each line is prefixed with the current UTC time so the output reads as a
/// server log.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
      "o".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("GET /currently-playing -> 200");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
      "✓".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal startup failures such as missing configuration; a
/// failing request is reported with [`warning!`] and never stops the server.
///
/// # Example
///
/// ```
/// error!("Invalid configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
      "!".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, most importantly failed requests: the
/// detailed cause goes to the log while the caller only sees a generic
/// message.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
      "!".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}
