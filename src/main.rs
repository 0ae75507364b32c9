use classroom_api::config::config;
use classroom_api::routes::app;
use classroom_api::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_HOST, CLASSROOM_API_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config();
    tracing::info!("Starting Classroom API in {:?} mode", config.environment);

    let store = Store::connect(&config.database).await?;
    store.migrate().await?;

    let app = app(store);

    // Allow tests or deployments to override port via env
    let port = std::env::var("CLASSROOM_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Classroom API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
