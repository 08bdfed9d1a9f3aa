mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::google::{GoogleTokenVerifier, TokenVerifier};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = config::Config::load().expect("invalid configuration");

    let verifier: Option<Arc<dyn TokenVerifier>> = match config.google_client_id.as_deref() {
        Some(client_id) => Some(Arc::new(GoogleTokenVerifier::new(client_id))),
        None => {
            tracing::warn!("GOOGLE_CLIENT_ID not set; greeting updates are unauthenticated");
            None
        }
    };

    let state = state::AppState::new(config.greeting.clone(), verifier)
        .with_client_id(config.google_client_id.as_deref());
    let app = routes::app(state, &config.web_root);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, web_root = %config.web_root.display(), "greet listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
    tracing::info!("greet stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
