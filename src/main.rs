
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use flux_prompt_proxy::{
    api,
    config,
    flux,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();
    // Create FLUX Space client
    let flux_client = flux::client::FluxClient::new(config.flux_space_url.clone());

    let state = Arc::new(api::routes::AppState {
        flux_client,
        params: flux::client::GenerationParams::default(),
        static_dir: config.static_dir.clone(),
    });

    // Build our application with a route
    let app = Router::new()
        .route("/", get(api::handlers::index))
        .route("/api/generate", post(api::handlers::generate))
        .fallback_service(ServeDir::new(config.static_dir.clone()))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024))
        .with_state(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 3000", port_str);
        3000
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
