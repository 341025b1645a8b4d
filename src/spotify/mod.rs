//! # Spotify Integration Module
//!
//! The thin client between the proxy and the Spotify Web API. It covers
//! exactly two endpoints:
//!
//! - `POST /api/token` - [`auth::exchange`] turns the configured refresh
//!   token into an access token
//! - `GET /me/player/currently-playing` - [`player::fetch`] reads the
//!   current playback state with that token
//!
//! [`SpotifyClient::now_playing`] composes both with the projection from
//! [`crate::utils`] into the single pipeline both HTTP handlers share.
//!
//! ## Timeouts and cancellation
//!
//! The underlying `reqwest::Client` is built with a request timeout and a
//! connect timeout, so a slow upstream cannot pile up open requests. There
//! are no retries. When the inbound connection goes away the handler future
//! is dropped, and with it any outbound request still in flight.
//!
//! ## Credentials
//!
//! The refresh token and client secret only ever leave the process inside the
//! token request body. Errors produced here strip request URLs and never carry
//! credential values, so they are safe to log.

pub mod auth;
pub mod player;

use std::sync::Arc;

use reqwest::Client;

use crate::{
    config::Config,
    error::NowPlayingError,
    types::{NowPlayingSummary, Playback},
    utils,
};

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Arc<Config>,
}

impl SpotifyClient {
    /// Builds a client whose requests are bounded by the configured timeout.
    pub fn new(config: Arc<Config>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.upstream_timeout)
            .connect_timeout(config.upstream_timeout)
            .build()?;

        Ok(SpotifyClient { http, config })
    }

    /// Runs the full pipeline: exchange, fetch, project.
    ///
    /// Returns `Ok(None)` when nothing is currently playing.
    pub async fn now_playing(&self) -> Result<Option<NowPlayingSummary>, NowPlayingError> {
        let token =
            auth::exchange(&self.http, &self.config.token_url, &self.config.credentials).await?;

        match player::fetch(&self.http, &self.config.currently_playing_url(), &token).await? {
            Playback::Playing(item) => Ok(Some(utils::project(&item)?)),
            Playback::NothingPlaying => Ok(None),
        }
    }
}
