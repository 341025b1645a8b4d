//! Configuration management for the now playing proxy.
//!
//! All configuration comes from environment variables and is read exactly
//! once at startup into a [`Config`] value, which is then handed to the
//! server. Nothing reads the environment while serving requests.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory (`nowplaying/.env`)
//! 4. Application defaults for the optional settings

use std::{
    env, fmt, io,
    net::SocketAddr,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use crate::{error::ConfigError, types::Credentials};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// Loads `.env` files into the process environment.
///
/// Both the working directory and the platform-specific local data
/// directory are tried:
/// - Linux: `~/.local/share/nowplaying/.env`
/// - macOS: `~/Library/Application Support/nowplaying/.env`
/// - Windows: `%LOCALAPPDATA%/nowplaying/.env`
///
/// Missing files are not an error since the variables may just as well come
/// from the real environment. Variables that are already set win over the
/// file contents.
///
/// # Errors
///
/// Returns [`ConfigError::EnvFile`] if a file exists but cannot be read or
/// contains a line that does not parse. dotenv stops at the first bad line,
/// so carrying on would only surface as a misleading missing variable.
///
/// # Example
///
/// ```
/// if let Err(e) = config::load_env() {
///     error!("Cannot load environment: {}", e);
/// }
/// ```
pub fn load_env() -> Result<(), ConfigError> {
    ignore_missing(dotenv::dotenv().map(|_| ()))?;

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nowplaying/.env");
    load_env_file(&path)
}

/// Loads a single `.env` file, treating a missing file as empty.
pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    ignore_missing(dotenv::from_path(path))
}

fn ignore_missing(result: Result<(), dotenv::Error>) -> Result<(), ConfigError> {
    match result {
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other.map_err(ConfigError::from),
    }
}

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub server_addr: SocketAddr,
    pub token_url: String,
    pub api_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails if `CLIENT_ID`, `CLIENT_SECRET` or `REFRESH_TOKEN` is missing
    /// or empty, or if an optional variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Lets tests inject fake credentials without touching the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let credentials = Credentials {
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            refresh_token: required("REFRESH_TOKEN")?,
        };

        let server_addr = parse_or(&lookup, "SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)?;
        let timeout_secs: u64 = parse_or(
            &lookup,
            "UPSTREAM_TIMEOUT_SECS",
            &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "UPSTREAM_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Config {
            credentials,
            server_addr,
            token_url: optional(&lookup, "SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: optional(&lookup, "SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Full URL of the currently playing endpoint.
    pub fn currently_playing_url(&self) -> String {
        format!("{}/me/player/currently-playing", self.api_url)
    }
}

fn optional<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    optional(lookup, name, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        })
}
