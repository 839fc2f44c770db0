#![recursion_limit = "256"]

mod config;
mod routes;
mod upstream;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Non-fatal: pages render their own load errors if the API is down.
    tokio::spawn(upstream::report(config.api_url.clone()));

    let app = routes::app(&config).expect("router init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, api = %config.api_url, "inkwell listening");
    axum::serve(listener, app).await.expect("server failed");
}
