use learnhub_api::config;
use learnhub_api::database::{manager, schema};
use learnhub_api::router::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting learnhub API in {:?} mode", config.environment);

    let pool = manager::connect(&config.database.url, config.database.max_connections)
        .await
        .unwrap_or_else(|e| panic!("failed to open database {}: {}", config.database.url, e));

    schema::ensure_schema(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to apply schema: {}", e));

    let app = app(AppState { pool: pool.clone() });

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 learnhub API server listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server");

    // Release the process-scoped pool on the way out
    manager::close(&pool).await;
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
