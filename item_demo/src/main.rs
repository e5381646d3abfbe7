//! Item demo server. Binds `ITEMS_BIND_ADDR` (default 0.0.0.0:8001).

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("item_demo=info,tower_http=info")),
        )
        .init();

    let addr = std::env::var("ITEMS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8001".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("item demo listening on {}", listener.local_addr()?);
    axum::serve(listener, item_demo::router()).await?;
    Ok(())
}
