#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the process environment is used as is.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(&config).expect("http client init failed");

    let app = routes::app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, backend = %config.backend_url, "tigerlink listening");
    axum::serve(listener, app).await.expect("server failed");
}
