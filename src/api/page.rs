use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::{
    api::AppState,
    success,
    types::NowPlayingSummary,
    utils::{escape_html, safe_url},
    warning,
};

const STYLE: &str = r#"body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        display: flex;
        justify-content: center;
        align-items: center;
        height: 70vh;
        width: 100vw;
        padding: 0;
        margin: 0;
        text-align: center;
      }
      a {
        text-decoration: none;
        color: black;
      }"#;

pub async fn currently_playing_page(State(state): State<AppState>) -> Response {
    let cors = [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")];

    match state.spotify.now_playing().await {
        Ok(Some(summary)) => {
            success!("GET /currently-playing-page -> 200 {}", summary.name);
            (StatusCode::OK, cors, Html(render_page(&summary))).into_response()
        }
        Ok(None) => {
            success!("GET /currently-playing-page -> 204 nothing playing");
            super::nothing_playing()
        }
        Err(e) => {
            let status = e.status_code();
            warning!("GET /currently-playing-page -> {}: {}", status.as_u16(), e);
            (status, cors, Html(render_error_page(e.public_message()))).into_response()
        }
    }
}

/// Renders the now playing page.
///
/// Every interpolated value is escaped, and the link and image only keep
/// `http`/`https` URLs.
pub fn render_page(summary: &NowPlayingSummary) -> String {
    let name = escape_html(&summary.name);
    let url = escape_html(safe_url(&summary.url));
    let image = escape_html(safe_url(&summary.image));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name}</title>
    <link rel="icon" type="image/x-icon" href="{image}">
    <style>
      {STYLE}
    </style>
  </head>
  <body>
    <a href="{url}">
      <img src="{image}" alt="{name} Cover Image" height="320px" width="320px" />
      <h1>{name}</h1>
    </a>
  </body>
</html>
"#
    )
}

pub fn render_error_page(message: &str) -> String {
    let message = escape_html(message);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <title>{message}</title>
    <style>
      {STYLE}
    </style>
  </head>
  <body>
    <h4>{message}</h4>
  </body>
</html>
"#
    )
}
