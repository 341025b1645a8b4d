//! Error types for the now playing pipeline.

use axum::http::StatusCode;
use thiserror::Error;

/// Configuration could not be built at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// An optional variable is set but cannot be parsed.
    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },

    /// A `.env` file exists but cannot be read or parsed.
    #[error("invalid .env file: {0}")]
    EnvFile(#[from] dotenv::Error),
}

/// The refresh token could not be exchanged for an access token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token endpoint unreachable or timed out.
    #[error("token request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Token endpoint answered with a non-success status.
    #[error("token endpoint rejected the request with status {0}")]
    Rejected(reqwest::StatusCode),

    /// Token endpoint answered with something that is not JSON.
    #[error("token response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    /// Token response is JSON but carries no usable `access_token`.
    #[error("token response has no access_token")]
    MissingAccessToken,
}

/// The currently playing endpoint could not be queried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure, timeout, or a non-success status.
    #[error("currently playing endpoint unavailable: {0}")]
    Unavailable(String),

    /// Endpoint reachable but the payload is unreadable or malformed.
    #[error("currently playing endpoint sent a bad response: {0}")]
    BadResponse(String),
}

/// The upstream payload cannot be turned into a summary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("track has no cover image")]
    NoImage,
}

/// Any failure of the request pipeline, as seen by the handlers.
#[derive(Debug, Error)]
pub enum NowPlayingError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

impl NowPlayingError {
    /// HTTP status reported to the caller for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NowPlayingError::Auth(_) => StatusCode::SERVICE_UNAVAILABLE,
            NowPlayingError::Upstream(UpstreamError::Unavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            NowPlayingError::Upstream(UpstreamError::BadResponse(_))
            | NowPlayingError::Projection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Generic message safe to return to an anonymous caller.
    pub fn public_message(&self) -> &'static str {
        if self.status_code() == StatusCode::SERVICE_UNAVAILABLE {
            "Spotify is currently unavailable"
        } else {
            "Could not determine the current track"
        }
    }
}
