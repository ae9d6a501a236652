use stub::StubState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Use STUB_ADDR or default to localhost:3000
    let addr = std::env::var("STUB_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Stub notes API listening on http://{}/api/v1", listener.local_addr()?);

    axum::serve(listener, stub::router(StubState::default())).await
}
