use nowplaying::{config, error, info, server};

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        error!("Cannot load environment: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    info!(
        "{} {} starting for client {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.credentials.client_id
    );

    if let Err(e) = server::start_api_server(config).await {
        error!("Server failed: {}", e);
    }
}
