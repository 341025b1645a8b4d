use reqwest::Client;

use crate::{
    error::AuthError,
    types::{AccessToken, Credentials, TokenResponse},
};

/// Exchanges the stored refresh token for a short-lived access token.
///
/// Sends a `refresh_token` grant to Spotify's token endpoint, authenticating
/// with the client id and secret in the form body. A new token is requested
/// for every call; nothing is cached.
///
/// # Arguments
///
/// * `client` - Shared HTTP client (carries the request timeout)
/// * `token_url` - Token endpoint, normally `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id, client secret and refresh token
///
/// # Errors
///
/// - [`AuthError::Transport`] if the endpoint cannot be reached in time
/// - [`AuthError::Rejected`] for a non-success status (e.g. revoked token)
/// - [`AuthError::Decode`] if the body is not JSON
/// - [`AuthError::MissingAccessToken`] if the JSON has no usable token
///
/// None of the error values contain the client secret or refresh token.
pub async fn exchange(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken, AuthError> {
    let res = client
        .post(token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.without_url()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(AuthError::Rejected(status));
    }

    let json: TokenResponse = res
        .json()
        .await
        .map_err(|e| AuthError::Decode(e.without_url()))?;

    json.access_token
        .filter(|token| !token.is_empty())
        .map(AccessToken::new)
        .ok_or(AuthError::MissingAccessToken)
}
