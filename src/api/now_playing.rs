use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{api::AppState, success, warning};

pub async fn currently_playing(State(state): State<AppState>) -> Response {
    let cors = [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")];

    match state.spotify.now_playing().await {
        Ok(Some(summary)) => {
            success!("GET /currently-playing -> 200 {}", summary.name);
            (StatusCode::OK, cors, Json(summary)).into_response()
        }
        Ok(None) => {
            success!("GET /currently-playing -> 204 nothing playing");
            super::nothing_playing()
        }
        Err(e) => {
            let status = e.status_code();
            warning!("GET /currently-playing -> {}: {}", status.as_u16(), e);
            (status, cors, Json(json!({ "error": e.public_message() }))).into_response()
        }
    }
}
