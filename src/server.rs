use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{
    Res,
    api::{self, AppState},
    config::Config,
    info,
    spotify::SpotifyClient,
    warning,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/currently-playing", get(api::currently_playing))
        .route("/currently-playing-page", get(api::currently_playing_page))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn start_api_server(config: Config) -> Res<()> {
    let config = Arc::new(config);
    let state = AppState {
        spotify: SpotifyClient::new(Arc::clone(&config))?,
    };

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warning!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warning!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down");
}
