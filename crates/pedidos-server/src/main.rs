//! Server entry point.

use tracing_subscriber::EnvFilter;

use pedidos_server::{ServerConfig, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    run(ServerConfig::from_env()).await
}
