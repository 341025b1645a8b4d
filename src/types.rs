use std::fmt;

use serde::{Deserialize, Serialize};

/// Long-lived Spotify app credentials, read once at startup.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Short-lived bearer token, valid for a single inbound request.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Body of a successful `POST /api/token`. Only the access token is used.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

/// Body of `GET /me/player/currently-playing`.
///
/// `item` is `null` while an ad is playing or when the current item is not a
/// track Spotify describes (e.g. an episode without `additional_types`).
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlaying {
    pub item: Option<TrackItem>,
}

/// The playing track, reduced to the fields the summary is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    pub name: String,
    pub album: Album,
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub name: String,
    /// Largest image first, as delivered by Spotify. May be empty.
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// Links to the track on Spotify. Local files have none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// Outcome of a successful currently playing request.
#[derive(Debug, Clone)]
pub enum Playback {
    Playing(TrackItem),
    NothingPlaying,
}

/// The only shape ever returned to callers.
///
/// Serialises as `{"name": .., "url": .., "image": ..}` with empty fields
/// left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NowPlayingSummary {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
}
