//! # API Module
//!
//! HTTP handlers of the now playing proxy. Both endpoints are public and
//! take no input: the account being queried is fixed by the server's
//! configuration.
//!
//! ## Endpoints
//!
//! - [`currently_playing`] - `GET /currently-playing`, the summary as JSON
//! - [`currently_playing_page`] - `GET /currently-playing-page`, the summary
//!   rendered as a self-contained HTML page
//!
//! Both run [`SpotifyClient::now_playing`] and only differ in how the result
//! is written out. Every response carries `Access-Control-Allow-Origin: *` so
//! the JSON can be fetched from any page.
//!
//! ## Status codes
//!
//! | Outcome                               | Status |
//! |---------------------------------------|--------|
//! | Track playing                         | 200    |
//! | Nothing playing                       | 204    |
//! | Token exchange or Spotify unreachable | 503    |
//! | Malformed payload or no cover image   | 500    |
//!
//! Error bodies only ever contain a fixed, generic message. The actual
//! cause is logged on the server.

mod now_playing;
mod page;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::spotify::SpotifyClient;

pub use now_playing::currently_playing;
pub use page::{currently_playing_page, render_error_page, render_page};

/// State shared by all handlers. Cloned per request; holds no mutable data.
#[derive(Debug, Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
}

fn nothing_playing() -> Response {
    (
        StatusCode::NO_CONTENT,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
    )
        .into_response()
}
