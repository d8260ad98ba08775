#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use residency_roster::http_api::{self, AppState};
    use residency_roster::persistence::DatasetStore;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = std::env::var("RESIDENCY_ROSTER_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    #[cfg(feature = "sqlite")]
    let datasets: Arc<dyn DatasetStore + Send + Sync> = {
        let path = std::env::var("RESIDENCY_ROSTER_DB").unwrap_or_else(|_| "roster.db".to_string());
        Arc::new(residency_roster::persistence::SqliteDatasetStore::new(path)?)
    };
    #[cfg(not(feature = "sqlite"))]
    let datasets: Arc<dyn DatasetStore + Send + Sync> =
        Arc::new(residency_roster::persistence::MemoryDatasetStore::new());

    let state = AppState::new(datasets)?;
    println!("residency-roster HTTP API listening on http://{addr}");
    http_api::serve(addr, state).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
