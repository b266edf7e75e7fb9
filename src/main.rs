mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment is used as-is.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let app = routes::app(&config).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        resize_strategy = config.resize.kind(),
        resize_delay_ms = config.resize.delay_millis(),
        "dashboard listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
