use reqwest::{Client, StatusCode};

use crate::{
    error::UpstreamError,
    types::{AccessToken, CurrentlyPlaying, Playback},
};

/// Retrieves the track currently playing on the authenticated account.
///
/// Calls `GET /me/player/currently-playing` with the access token as bearer
/// credential.
///
/// # Returns
///
/// - `Ok(Playback::Playing(item))` - a track is playing (or paused)
/// - `Ok(Playback::NothingPlaying)` - no active session. Spotify signals this
///   with `204 No Content`, an empty body, or `"item": null` (ad breaks)
///
/// # Errors
///
/// - [`UpstreamError::Unavailable`] - transport failure, timeout, or a
///   non-success status
/// - [`UpstreamError::BadResponse`] - body unreadable, not JSON, or not
///   shaped like a currently playing payload
pub async fn fetch(
    client: &Client,
    url: &str,
    token: &AccessToken,
) -> Result<Playback, UpstreamError> {
    let response = client
        .get(url)
        .bearer_auth(token.secret())
        .send()
        .await
        .map_err(|e| UpstreamError::Unavailable(e.without_url().to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Unavailable(format!("status {}", status)));
    }
    if status == StatusCode::NO_CONTENT {
        return Ok(Playback::NothingPlaying);
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| UpstreamError::BadResponse(e.without_url().to_string()))?;

    parse_playback(&body)
}

/// Interprets a currently playing response body.
pub fn parse_playback(body: &[u8]) -> Result<Playback, UpstreamError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Playback::NothingPlaying);
    }

    let current: CurrentlyPlaying =
        serde_json::from_slice(body).map_err(|e| UpstreamError::BadResponse(e.to_string()))?;

    Ok(match current.item {
        Some(item) => Playback::Playing(item),
        None => Playback::NothingPlaying,
    })
}
